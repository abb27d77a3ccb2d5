use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset over form-table indices
///
/// Backs the options cache: one bit per expanded form, so candidate sets for
/// repeated boundary patterns share compact storage. Indices are 0-based,
/// matching positions in the form table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormBitset {
    bits: BitVec,
    capacity: usize,
}

impl FormBitset {
    /// Create a bitset admitting no forms
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert a form index; out-of-range indices are ignored
    pub fn insert(&mut self, form: usize) {
        if form < self.capacity {
            self.bits.set(form, true);
        }
    }

    /// Test form membership
    pub fn contains(&self, form: usize) -> bool {
        self.bits.get(form).as_deref() == Some(&true)
    }

    /// Number of forms present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no form is present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract all present form indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for FormBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormBitset({} forms: {:?})", self.count(), self.to_vec())
    }
}
