//! Tests for the randomized backtracking depth policy

#[cfg(test)]
mod tests {
    use ghosttile::algorithm::backtrack::BacktrackPolicy;
    use ghosttile::algorithm::selection::Selector;
    use ghosttile::io::configuration::{BACKTRACK_ALPHA, BACKTRACK_BETA};

    // Tests the default policy picks up the configured distribution
    // Verified by hardcoding different defaults
    #[test]
    fn test_default_policy_parameters() {
        let policy = BacktrackPolicy::default();
        assert!((policy.alpha - BACKTRACK_ALPHA).abs() < 1e-12);
        assert!((policy.beta - BACKTRACK_BETA).abs() < 1e-12);
    }

    // Tests tiny grids always unwind exactly one placement
    // Verified by letting escalation run on a single-tile grid
    #[test]
    fn test_depth_one_on_tiny_grids() {
        let policy = BacktrackPolicy::default();
        let mut selector = Selector::new(21);
        for _ in 0..100 {
            assert_eq!(policy.draw_depth(0, &mut selector), 1);
            assert_eq!(policy.draw_depth(1, &mut selector), 1);
            assert_eq!(policy.draw_depth(2, &mut selector), 1);
        }
    }

    // Tests drawn depths stay within the placed-tile cap
    // Verified by raising the cap to the full tile count
    #[test]
    fn test_depth_bounded_by_placed_tiles() {
        let policy = BacktrackPolicy::default();
        let mut selector = Selector::new(37);
        for placed in [3, 5, 20, 100] {
            for _ in 0..200 {
                let depth = policy.draw_depth(placed, &mut selector);
                assert!(depth >= 1);
                assert!(depth <= placed - 1, "depth {depth} exceeds cap for {placed}");
            }
        }
    }

    // Tests a sharp distribution keeps every draw shallow
    // Verified by loosening beta until deep draws appear
    #[test]
    fn test_sharp_distribution_stays_shallow() {
        let policy = BacktrackPolicy {
            alpha: 1.0,
            beta: 1000.0,
        };
        let mut selector = Selector::new(4);
        for _ in 0..500 {
            assert_eq!(policy.draw_depth(50, &mut selector), 1);
        }
    }

    // Tests deep draws occur with nonzero frequency under the defaults
    // Verified by collapsing the distribution to depth 1
    #[test]
    fn test_defaults_occasionally_draw_deep() {
        let policy = BacktrackPolicy::default();
        let mut selector = Selector::new(16);
        let mut deepest = 0;
        for _ in 0..5000 {
            deepest = deepest.max(policy.draw_depth(1000, &mut selector));
        }
        assert!(deepest >= 3, "deepest draw was only {deepest}");
    }
}
