//! Mathematical utilities for the assembly algorithm

/// Backtracking depth distribution
pub mod distribution;
