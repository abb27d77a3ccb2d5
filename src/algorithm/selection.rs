use crate::spatial::topology::Coord;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Growth-roundness score for a frontier coordinate
///
/// Computes `(2Δy)² + (2Δx + Δy)²` relative to the frontier centroid. The
/// cross term compensates for the sheared hexagonal lattice, so ascending
/// scores visit the frontier roughly ring by ring and the tiling grows
/// round instead of stringy.
pub fn frontier_score(coord: Coord, centroid: [f64; 2]) -> f64 {
    let dy = coord[0] as f64 - centroid[0];
    let dx = coord[1] as f64 - centroid[1];
    (dy * 2.0).powi(2) + (2.0f64.mul_add(dx, dy)).powi(2)
}

/// Seeded random selector for reproducible stochastic choices
///
/// Owns the only randomness in a run; constructing two assemblers with the
/// same seed and inputs replays the same search.
pub struct Selector {
    rng: StdRng,
}

impl Selector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted random selection over non-negative weights
    ///
    /// Returns an index into `weights` with probability proportional to its
    /// weight. Zero-weight entries are never selected; returns `None` when
    /// the weights sum to zero (or the slice is empty), leaving the policy
    /// for that case to the caller.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut remaining = self.rng.random::<f64>() * total;
        for (index, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            remaining -= weight;
            if remaining <= 0.0 {
                return Some(index);
            }
        }
        weights.iter().rposition(|&weight| weight > 0.0)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Bernoulli draw with the given success probability
    ///
    /// Probabilities outside `[0, 1]` saturate rather than panic.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }
}
