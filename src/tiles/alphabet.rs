//! Edge symbol alphabet: complement pairs, the blank edge, and the wildcard

use crate::io::error::{AssemblyError, Result};
use std::collections::HashMap;

/// Symbol-to-complement mapping for tile edges
///
/// The mapping is an involution: applying it twice returns the original
/// symbol. One symbol is the blank (no edge), which complements itself, and
/// a separate wildcard symbol stands for "any edge" in derived patterns. The
/// wildcard never appears in a form.
#[derive(Clone, Debug)]
pub struct Alphabet {
    complements: HashMap<u8, u8>,
    blank: u8,
    wildcard: u8,
}

impl Alphabet {
    /// Build an alphabet from complement pairs
    ///
    /// Each pair is recorded in both directions. The blank symbol is added
    /// as self-complementary if not already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the pairs do not form an involution, or if the
    /// wildcard collides with a mapped symbol.
    pub fn new(pairs: &[(u8, u8)], blank: u8, wildcard: u8) -> Result<Self> {
        let mut complements = HashMap::new();
        for &(a, b) in pairs {
            if complements.get(&a).is_some_and(|&prior| prior != b)
                || complements.get(&b).is_some_and(|&prior| prior != a)
            {
                return Err(AssemblyError::InvalidAlphabet {
                    reason: format!(
                        "symbols '{}' and '{}' conflict with an earlier pair",
                        a as char, b as char
                    ),
                });
            }
            complements.insert(a, b);
            complements.insert(b, a);
        }
        complements.entry(blank).or_insert(blank);
        if complements.get(&blank) != Some(&blank) {
            return Err(AssemblyError::InvalidAlphabet {
                reason: "blank symbol must complement itself".to_string(),
            });
        }
        if complements.contains_key(&wildcard) {
            return Err(AssemblyError::InvalidAlphabet {
                reason: "wildcard symbol must not be a mapped edge symbol".to_string(),
            });
        }
        Ok(Self {
            complements,
            blank,
            wildcard,
        })
    }

    /// The standard alphabet
    ///
    /// `-` is the blank edge; letter pairs `aA bB cC dD` complement across
    /// case; digits `1 2 3 4` and `_` complement themselves; `.` is the
    /// wildcard.
    pub fn standard() -> Self {
        let mut complements = HashMap::new();
        for &(a, b) in &[
            (b'-', b'-'),
            (b'A', b'a'),
            (b'B', b'b'),
            (b'C', b'c'),
            (b'D', b'd'),
            (b'1', b'1'),
            (b'2', b'2'),
            (b'3', b'3'),
            (b'4', b'4'),
            (b'_', b'_'),
        ] {
            complements.insert(a, b);
            complements.insert(b, a);
        }
        Self {
            complements,
            blank: b'-',
            wildcard: b'.',
        }
    }

    /// Complement of a symbol
    ///
    /// Unmapped symbols complement themselves; the construction layer is
    /// responsible for rejecting them before they reach the engine.
    pub fn complement(&self, symbol: u8) -> u8 {
        self.complements.get(&symbol).copied().unwrap_or(symbol)
    }

    /// Whether a symbol belongs to the alphabet
    pub fn is_edge(&self, symbol: u8) -> bool {
        self.complements.contains_key(&symbol)
    }

    /// The blank (no-edge) symbol
    pub const fn blank(&self) -> u8 {
        self.blank
    }

    /// The wildcard symbol used in derived patterns
    pub const fn wildcard(&self) -> u8 {
        self.wildcard
    }
}
