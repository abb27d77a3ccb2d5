//! Incremental constraint-satisfaction engine for edge-matching tile assembly
//!
//! Tiles carry one symbol per edge and may only sit next to tiles whose
//! facing edges carry complementary symbols. The engine grows a pattern one
//! tile at a time from the centre of a bounded region, preferring the most
//! constrained frontier cell, and backtracks a randomized number of steps
//! when it paints itself into a corner. Boundary shapes proven unfillable
//! are memoized so the same dead end is never entered twice.

#![forbid(unsafe_code)]

/// Core assembly algorithm: option filtering, locus analysis, and backtracking
pub mod algorithm;
/// Input/output operations, tile-set parsing, and error handling
pub mod io;
/// Mathematical utilities for probability calculations
pub mod math;
/// Spatial topology and assembly-region management
pub mod spatial;
/// Edge alphabets and tile form tables
pub mod tiles;

pub use io::error::{AssemblyError, Result};
