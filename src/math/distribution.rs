/// Probability of escalating a backtrack from depth `n` to `n + 1`
///
/// Computes `(n / (n + alpha))^beta`. The probability approaches 1 as `n`
/// grows, so deep backtracks become self-sustaining once started while depth
/// 1 remains the most common draw. `alpha` shifts where escalation becomes
/// likely; `beta` sharpens the low-depth cutoff.
pub fn escalation_probability(depth: usize, alpha: f64, beta: f64) -> f64 {
    let n = depth as f64;
    (n / (n + alpha)).powf(beta)
}
