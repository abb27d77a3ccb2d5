//! Connection topologies describing how tile edges meet neighboring cells
//!
//! A topology is an ordered list of links, one per tile edge. Each link gives
//! the offset of the neighboring coordinate and the slot on that neighbor
//! which faces back. The relation is a symmetric pairing: following a link
//! and then its reverse slot returns to the starting cell and edge.

/// Grid coordinate as `[row, column]`
pub type Coord = [i32; 2];

/// Diagonal offsets used by the square-grid pocket rule
///
/// On four-edge topologies, an empty cell whose only placed contact is
/// diagonal still belongs to the surrounding region; without this the flood
/// fill reports false isolated pockets.
pub const DIAGONAL_OFFSETS: [Coord; 4] = [[-1, -1], [-1, 1], [1, -1], [1, 1]];

/// One tile edge: neighbor offset and the facing slot on that neighbor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    /// Row offset to the neighboring coordinate
    pub dy: i32,
    /// Column offset to the neighboring coordinate
    pub dx: i32,
    /// Edge slot on the neighbor that faces back toward this cell
    pub reverse: usize,
}

impl Link {
    /// Coordinate reached by following this link from `coord`
    pub const fn neighbor(&self, coord: Coord) -> Coord {
        [coord[0] + self.dy, coord[1] + self.dx]
    }
}

/// Ordered edge-to-neighbor mapping for one grid family
///
/// Hexagonal cells live on a sheared square lattice:
///
/// ```text
///     o o
///   o * o
///   o o
/// ```
///
/// so all coordinates stay integral and a regular hexagon pattern is a
/// linear transformation away (applied by whatever renders the result).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    links: Vec<Link>,
}

impl Topology {
    /// Six-edge topology on the sheared hexagonal lattice
    pub fn hexagonal() -> Self {
        Self {
            links: vec![
                Link { dy: -1, dx: 0, reverse: 3 },
                Link { dy: -1, dx: 1, reverse: 4 },
                Link { dy: 0, dx: 1, reverse: 5 },
                Link { dy: 1, dx: 0, reverse: 0 },
                Link { dy: 1, dx: -1, reverse: 1 },
                Link { dy: 0, dx: -1, reverse: 2 },
            ],
        }
    }

    /// Four-edge topology on the ordinary square lattice
    pub fn square() -> Self {
        Self {
            links: vec![
                Link { dy: -1, dx: 0, reverse: 2 },
                Link { dy: 0, dx: 1, reverse: 3 },
                Link { dy: 1, dx: 0, reverse: 0 },
                Link { dy: 0, dx: -1, reverse: 1 },
            ],
        }
    }

    /// Topology matching a given edge count, if one exists
    pub fn for_edge_count(edges: usize) -> Option<Self> {
        match edges {
            4 => Some(Self::square()),
            6 => Some(Self::hexagonal()),
            _ => None,
        }
    }

    /// Number of edges per tile
    pub const fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// All links in slot order
    pub const fn links(&self) -> &[Link] {
        self.links.as_slice()
    }

    /// Link at an index taken modulo the edge count
    ///
    /// Used to permute the traversal order during locus canonicalization.
    pub fn link_wrapped(&self, index: usize) -> Link {
        let count = self.links.len().max(1);
        self.links
            .get(index % count)
            .copied()
            .unwrap_or(Link { dy: 0, dx: 0, reverse: 0 })
    }

    /// Whether this is the four-edge topology subject to the pocket rule
    pub const fn is_square(&self) -> bool {
        self.links.len() == 4
    }

    /// Check the symmetric pairing invariant over all slots
    ///
    /// Every link's reverse slot must point back with the negated offset.
    /// Construction layers may call this to validate custom topologies; the
    /// engine itself trusts its input.
    pub fn pairing_is_symmetric(&self) -> bool {
        self.links.iter().enumerate().all(|(slot, link)| {
            self.links.get(link.reverse).is_some_and(|back| {
                back.dy == -link.dy && back.dx == -link.dx && back.reverse == slot
            })
        })
    }
}
