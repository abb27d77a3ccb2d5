//! Edge alphabets and form/rotation bookkeeping
//!
//! Tiles are described purely by their edges: a form is an ordered sequence
//! of edge symbols, and two touching edges fit when their symbols are
//! complements under the alphabet's involution.

/// Edge symbol alphabet and complement mapping
pub mod alphabet;
/// Base forms and the expanded rotation table
pub mod table;

pub use alphabet::Alphabet;
pub use table::{BaseForm, FormTable};
