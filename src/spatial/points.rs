//! Finite sets of coordinates eligible to hold a tile
//!
//! The point set is supplied by the construction layer and may be replaced
//! live through `Assembler::update_point_set`; all placement logic stays in
//! the engine.

use crate::spatial::topology::Coord;
use std::collections::HashSet;

/// Set of integer coordinates the assembler may fill
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: HashSet<Coord>,
}

impl PointSet {
    /// Create an empty point set
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis-aligned rectangle of the given cell dimensions, centered on the
    /// origin
    ///
    /// Even dimensions extend one cell further on the negative side so the
    /// origin is always included.
    pub fn rectangle(width: i32, height: i32) -> Self {
        let mut points = HashSet::new();
        for y in -(height / 2)..(height - height / 2) {
            for x in -(width / 2)..(width - width / 2) {
                points.insert([y, x]);
            }
        }
        Self { points }
    }

    /// Membership test
    pub fn contains(&self, coord: Coord) -> bool {
        self.points.contains(&coord)
    }

    /// Number of eligible coordinates
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no coordinate is eligible
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over all eligible coordinates in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.points.iter().copied()
    }
}

impl FromIterator<Coord> for PointSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
