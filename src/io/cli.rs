//! Command-line interface for running tile assemblies

use crate::algorithm::assembler::Assembler;
use crate::io::configuration::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_REGION_HEIGHT, DEFAULT_REGION_WIDTH, DEFAULT_SEED,
};
use crate::io::error::{AssemblyError, Result};
use crate::io::progress::ProgressManager;
use crate::io::tileset::TileSetConfig;
use crate::spatial::points::PointSet;
use std::fmt;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ghosttile")]
#[command(version, about = "Assemble emergent patterns from edge-matching tile sets")]
/// Command-line arguments for the assembly tool
pub struct Cli {
    /// Tile-set specification, e.g. "B-Aa-- b--Aa-"
    #[arg(value_name = "TILE_SET")]
    pub tile_set: Option<String>,

    /// Run a built-in catalogue entry by index instead
    #[arg(short, long, conflicts_with = "tile_set")]
    pub catalogue: Option<usize>,

    /// Random seed for reproducible assembly
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum iterations before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: usize,

    /// Assembly region width in cells (overridden by width= in the tile set)
    #[arg(short = 'W', long, default_value_t = DEFAULT_REGION_WIDTH)]
    pub width: i32,

    /// Assembly region height in cells (overridden by height= in the tile set)
    #[arg(short = 'H', long, default_value_t = DEFAULT_REGION_HEIGHT)]
    pub height: i32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Outcome of a completed run, for display to the user
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Iterations actually executed
    pub iterations_run: usize,
    /// Tiles placed when the run ended
    pub placed: usize,
    /// Cells in the assembly region
    pub region_size: usize,
    /// Whether the engine reported exhaustion before the ceiling
    pub stuck: bool,
    /// Dead-locus signatures recorded by the end of the run
    pub dead_loci: usize,
    /// Options-cache hits over the run
    pub cache_hits: usize,
    /// Options-cache misses over the run
    pub cache_misses: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.stuck { "stuck" } else { "stopped" };
        writeln!(
            f,
            "{outcome} after {} iterations: {}/{} cells filled",
            self.iterations_run, self.placed, self.region_size
        )?;
        write!(
            f,
            "dead loci recorded: {}; options cache: {} hits / {} misses",
            self.dead_loci, self.cache_hits, self.cache_misses
        )
    }
}

/// Drives one assembly run from parsed CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the run and return its summary
    ///
    /// # Errors
    ///
    /// Returns an error if no tile set was given or the specification fails
    /// to parse.
    pub fn run(&self) -> Result<RunSummary> {
        let config = self.resolve_config()?;

        let width = config.width.unwrap_or(self.cli.width);
        let height = config.height.unwrap_or(self.cli.height);
        let point_set = PointSet::rectangle(width, height);
        let region_size = point_set.len();

        let mut assembler = Assembler::new(
            config.topology,
            config.alphabet,
            &config.forms,
            point_set,
            self.cli.seed,
        );

        let label = if config.name.is_empty() {
            "assembling".to_string()
        } else {
            config.name.clone()
        };
        let progress = (!self.cli.quiet).then(|| ProgressManager::new(&label, self.cli.iterations));

        let mut iterations_run = 0;
        let mut stuck = false;
        for iteration in 1..=self.cli.iterations {
            iterations_run = iteration;
            if !assembler.iterate() {
                stuck = true;
                break;
            }
            if let Some(ref bar) = progress {
                bar.update(iteration, assembler.tiles().len());
            }
        }
        if let Some(ref bar) = progress {
            bar.finish(stuck);
        }

        let stats = assembler.cache_stats();
        Ok(RunSummary {
            iterations_run,
            placed: assembler.tiles().len(),
            region_size,
            stuck,
            dead_loci: assembler.dead_locus_count(),
            cache_hits: stats.hits,
            cache_misses: stats.misses,
        })
    }

    fn resolve_config(&self) -> Result<TileSetConfig> {
        if let Some(ref spec) = self.cli.tile_set {
            return TileSetConfig::parse(spec);
        }
        if let Some(index) = self.cli.catalogue {
            return TileSetConfig::from_catalogue(index);
        }
        Err(AssemblyError::MissingTileSet)
    }
}
