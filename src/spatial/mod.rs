//! Spatial primitives for the assembly grid
//!
//! This module contains the geometric boundary of the engine:
//! - Connection topologies (which edge slots touch which neighbors)
//! - The finite point set of coordinates eligible to hold a tile

/// Eligible-coordinate set management
pub mod points;
/// Connection topology definitions
pub mod topology;

pub use points::PointSet;
pub use topology::{Coord, Topology};
