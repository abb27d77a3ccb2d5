//! Expanded rotation table with provenance tracking
//!
//! Base forms are expanded into every cyclic rotation before assembly begins.
//! Symmetric forms collapse during deduplication, so the table holds at most
//! `base_forms * edge_count` entries. Each entry remembers which base form it
//! came from, how far it was rotated, and the selection weight it inherits.

/// One base tile definition with its selection weight
#[derive(Clone, Debug, PartialEq)]
pub struct BaseForm {
    /// Edge symbols in slot order; length must equal the topology edge count
    pub edges: Vec<u8>,
    /// Non-negative selection weight; zero keeps the form in the table but
    /// it is never drawn
    pub weight: f64,
}

impl BaseForm {
    /// Convenience constructor from a symbol string with weight 1
    pub fn from_symbols(symbols: &str) -> Self {
        Self {
            edges: symbols.bytes().collect(),
            weight: 1.0,
        }
    }
}

/// All distinct rotations of all base forms
#[derive(Clone, Debug, Default)]
pub struct FormTable {
    forms: Vec<Vec<u8>>,
    origin_ids: Vec<usize>,
    rotations: Vec<usize>,
    weights: Vec<f64>,
}

impl FormTable {
    /// Expand base forms into every cyclic rotation, deduplicating
    ///
    /// Rotation r of a form shifts its edges left r times. A rotation equal
    /// to one already in the table is dropped, so the first occurrence wins
    /// and carries its own provenance.
    pub fn expand(base_forms: &[BaseForm], edge_count: usize) -> Self {
        let mut table = Self::default();
        for (id, base) in base_forms.iter().enumerate() {
            let mut current = base.edges.clone();
            for rotation in 0..edge_count {
                if !table.forms.contains(&current) {
                    table.forms.push(current.clone());
                    table.origin_ids.push(id);
                    table.rotations.push(rotation);
                    table.weights.push(base.weight);
                }
                current.rotate_left(1);
            }
        }
        table
    }

    /// Number of distinct rotated forms
    pub const fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the table holds no forms
    pub const fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Edge symbols of a form
    pub fn form(&self, index: usize) -> Option<&[u8]> {
        self.forms.get(index).map(Vec::as_slice)
    }

    /// Symbol at one edge slot of a form
    pub fn symbol(&self, index: usize, slot: usize) -> Option<u8> {
        self.forms.get(index).and_then(|form| form.get(slot)).copied()
    }

    /// Base-form id each table entry originated from
    pub const fn origin_ids(&self) -> &[usize] {
        self.origin_ids.as_slice()
    }

    /// Rotation offset of each table entry relative to its base form
    pub const fn rotations(&self) -> &[usize] {
        self.rotations.as_slice()
    }

    /// Selection weight inherited by a form; absent indices weigh nothing
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(0.0)
    }
}
