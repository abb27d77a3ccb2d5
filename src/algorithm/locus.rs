//! Canonical signatures for empty regions and the dead-locus store
//!
//! A locus is a connected region of empty, placeable cells together with the
//! edge symbols its placed neighbors require. Once a locus is proven
//! unfillable its signature is recorded, and candidate filtering rejects any
//! move that would recreate the same shape-and-boundary combination.

use crate::algorithm::selection::Selector;
use crate::spatial::topology::Coord;
use std::collections::HashSet;

/// One boundary requirement inside a canonical locus signature
///
/// `dy`/`dx` are the canonicalized offset of the empty cell bordering the
/// placed tile, `slot` is the edge slot on the placed tile facing into the
/// region, and `symbol` is the edge symbol at that slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundaryEdge {
    /// Canonical row offset of the bordering empty cell
    pub dy: i32,
    /// Canonical column offset of the bordering empty cell
    pub dx: i32,
    /// Edge slot on the placed neighbor facing the region
    pub slot: usize,
    /// Edge symbol the placed neighbor presents at that slot
    pub symbol: u8,
}

/// Position-independent signature of a locus
///
/// Offsets are normalized by subtracting the minimum offset seen, entries
/// are sorted and deduplicated, so equality is set equality regardless of
/// traversal order or absolute position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocusSignature {
    edges: Box<[BoundaryEdge]>,
}

impl LocusSignature {
    /// Canonicalize raw boundary edges into a signature
    pub fn from_edges(mut edges: Vec<BoundaryEdge>) -> Self {
        let min_dy = edges.iter().map(|edge| edge.dy).min().unwrap_or(0);
        let min_dx = edges.iter().map(|edge| edge.dx).min().unwrap_or(0);
        for edge in &mut edges {
            edge.dy -= min_dy;
            edge.dx -= min_dx;
        }
        edges.sort_unstable();
        edges.dedup();
        Self {
            edges: edges.into_boxed_slice(),
        }
    }

    /// Number of boundary entries in the signature
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the locus has no placed border at all
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Full result of flood-filling a candidate region
pub struct LocusAnalysis {
    /// Canonical signature of the region
    pub signature: LocusSignature,
    /// Every empty coordinate the fill visited
    pub visited: HashSet<Coord>,
    /// Every placed coordinate bordering the fill
    pub border: HashSet<Coord>,
}

/// Set of locus signatures proven unfillable
///
/// Persists across backtracks. Memory stays bounded by evicting a random
/// half of the entries once the threshold is exceeded; a pruned signature
/// may be re-proven later at the usual cost.
#[derive(Default)]
pub struct DeadLoci {
    signatures: HashSet<LocusSignature>,
}

impl DeadLoci {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signature as dead
    pub fn insert(&mut self, signature: LocusSignature) {
        self.signatures.insert(signature);
    }

    /// Whether a signature is recorded as dead
    pub fn contains(&self, signature: &LocusSignature) -> bool {
        self.signatures.contains(signature)
    }

    /// Number of recorded signatures
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Evict each recorded signature with probability one half
    pub fn prune(&mut self, selector: &mut Selector) {
        self.signatures.retain(|_| selector.coin());
    }
}
