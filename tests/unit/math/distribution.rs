//! Tests for the backtracking depth escalation distribution

#[cfg(test)]
mod tests {
    use ghosttile::math::distribution::escalation_probability;

    // Tests the baseline escalation chance at depth 1
    // Verified by evaluating (1 / (1 + 1))^2 by hand
    #[test]
    fn test_depth_one_with_default_parameters() {
        let p = escalation_probability(1, 1.0, 2.0);
        assert!((p - 0.25).abs() < 1e-12);
    }

    // Tests escalation becomes more likely as depth grows
    // Verified by swapping the comparison direction
    #[test]
    fn test_probability_increases_with_depth() {
        let mut previous = 0.0;
        for depth in 1..50 {
            let p = escalation_probability(depth, 1.0, 2.0);
            assert!(p > previous, "probability should rise at depth {depth}");
            previous = p;
        }
    }

    // Tests the distribution approaches certainty at large depths
    // Verified by lowering the depth below the asymptotic regime
    #[test]
    fn test_probability_approaches_one() {
        let p = escalation_probability(10_000, 1.0, 2.0);
        assert!(p > 0.999);
        assert!(p < 1.0);
    }

    // Tests alpha shifts escalation toward deeper depths
    // Verified by comparing against a smaller alpha
    #[test]
    fn test_larger_alpha_suppresses_escalation() {
        let loose = escalation_probability(3, 1.0, 2.0);
        let tight = escalation_probability(3, 5.0, 2.0);
        assert!(tight < loose);
    }

    // Tests beta sharpens the low-depth cutoff
    // Verified by comparing against a smaller beta
    #[test]
    fn test_larger_beta_suppresses_shallow_escalation() {
        let loose = escalation_probability(2, 1.0, 2.0);
        let tight = escalation_probability(2, 1.0, 8.0);
        assert!(tight < loose);
    }
}
