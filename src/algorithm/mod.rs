//! The assembly engine: incremental randomized constraint search
//!
//! Growth happens one cell at a time on the frontier of the placed region.
//! Locally unsatisfiable regions are memoized as dead loci so the search
//! stops re-entering configurations already proven hopeless, and a
//! randomized-depth backtracking policy unwinds the history when stuck.

/// Core assembler owning all per-run state
pub mod assembler;
/// Randomized backtracking depth policy
pub mod backtrack;
/// Form-index bitsets for candidate sets
pub mod bitset;
/// Memoized pattern-to-candidates cache
pub mod cache;
/// Region analysis and dead-locus bookkeeping
pub mod locus;
/// Frontier scoring and seeded weighted selection
pub mod selection;

pub use assembler::Assembler;
