//! Tests for command-line parsing and the run driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use ghosttile::io::cli::{Cli, Runner};
    use ghosttile::io::configuration::{
        DEFAULT_MAX_ITERATIONS, DEFAULT_REGION_HEIGHT, DEFAULT_REGION_WIDTH, DEFAULT_SEED,
    };
    use ghosttile::io::error::AssemblyError;

    fn quiet_cli(tile_set: &str, size: i32, iterations: usize) -> Cli {
        Cli {
            tile_set: Some(tile_set.to_string()),
            catalogue: None,
            seed: 1,
            iterations,
            width: size,
            height: size,
            quiet: true,
        }
    }

    // Tests argument defaults match the configured constants
    // Verified by changing a default_value_t
    #[test]
    fn test_argument_defaults() {
        let parsed = Cli::try_parse_from(["ghosttile", "AaAa--"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(cli.tile_set.as_deref(), Some("AaAa--"));
            assert_eq!(cli.seed, DEFAULT_SEED);
            assert_eq!(cli.iterations, DEFAULT_MAX_ITERATIONS);
            assert_eq!(cli.width, DEFAULT_REGION_WIDTH);
            assert_eq!(cli.height, DEFAULT_REGION_HEIGHT);
            assert!(!cli.quiet);
            assert_eq!(cli.catalogue, None);
        }
    }

    // Tests a specification and a catalogue index cannot be combined
    // Verified by dropping the conflicts_with declaration
    #[test]
    fn test_tile_set_conflicts_with_catalogue() {
        let parsed = Cli::try_parse_from(["ghosttile", "--catalogue", "3", "AaAa--"]);
        assert!(parsed.is_err());
    }

    // Tests the runner demands some tile-set source
    // Verified by defaulting to catalogue entry zero
    #[test]
    fn test_missing_tile_set_rejected() {
        let cli = Cli {
            tile_set: None,
            catalogue: None,
            seed: 1,
            iterations: 10,
            width: 5,
            height: 5,
            quiet: true,
        };
        let result = Runner::new(cli).run();
        assert!(matches!(result, Err(AssemblyError::MissingTileSet)));
    }

    // Tests a trivially satisfiable set fills its region completely
    // Verified by halting before the region is full
    #[test]
    fn test_run_fills_trivial_region() -> ghosttile::Result<()> {
        let summary = Runner::new(quiet_cli("1111", 3, 50)).run()?;
        assert_eq!(summary.placed, 9);
        assert_eq!(summary.region_size, 9);
        assert!(summary.stuck, "a full region ends the run early");
        assert_eq!(summary.iterations_run, 10);
        Ok(())
    }

    // Tests specification dimensions override the command-line region
    // Verified by preferring the CLI flags
    #[test]
    fn test_spec_dimensions_override_flags() -> ghosttile::Result<()> {
        let summary = Runner::new(quiet_cli("width=2 height=2 1111", 9, 50)).run()?;
        assert_eq!(summary.region_size, 4);
        assert_eq!(summary.placed, 4);
        Ok(())
    }

    // Tests the iteration ceiling caps an unfinished run
    // Verified by running to completion regardless
    #[test]
    fn test_iteration_ceiling_respected() -> ghosttile::Result<()> {
        let summary = Runner::new(quiet_cli("1111", 21, 5)).run()?;
        assert_eq!(summary.iterations_run, 5);
        assert!(!summary.stuck);
        assert_eq!(summary.placed, 5);
        Ok(())
    }

    // Tests the summary display names the outcome
    // Verified by omitting the outcome word
    #[test]
    fn test_summary_display() -> ghosttile::Result<()> {
        let summary = Runner::new(quiet_cli("1111", 3, 50)).run()?;
        let text = summary.to_string();
        assert!(text.contains("stuck"));
        assert!(text.contains("9/9"));
        Ok(())
    }
}
