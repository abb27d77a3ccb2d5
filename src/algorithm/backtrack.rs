use crate::algorithm::selection::Selector;
use crate::io::configuration::{BACKTRACK_ALPHA, BACKTRACK_BETA};
use crate::math::distribution::escalation_probability;

/// Randomized backtracking depth policy
///
/// When the assembler hits a dead end it unwinds a random number of
/// placements. The depth starts at 1 and escalates one step at a time with
/// probability `(n / (n + alpha))^beta`, capped at one less than the number
/// of placed tiles. Small backtracks dominate, but occasional deep unwinds
/// let the search escape large doomed structures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacktrackPolicy {
    /// Distribution shift; larger values make escalation less likely at
    /// shallow depths
    pub alpha: f64,
    /// Distribution sharpness; larger values concentrate draws near depth 1
    pub beta: f64,
}

impl Default for BacktrackPolicy {
    fn default() -> Self {
        Self {
            alpha: BACKTRACK_ALPHA,
            beta: BACKTRACK_BETA,
        }
    }
}

impl BacktrackPolicy {
    /// Draw an undo depth for a grid currently holding `placed` tiles
    ///
    /// Always at least 1; never reaches `placed` so a backtrack cannot by
    /// itself clear the grid (the trailing dead-locus check in the assembler
    /// may still pop further).
    pub fn draw_depth(&self, placed: usize, selector: &mut Selector) -> usize {
        let mut depth = 1;
        while placed > 1
            && depth < placed - 1
            && selector.chance(escalation_probability(depth, self.alpha, self.beta))
        {
            depth += 1;
        }
        depth
    }
}
