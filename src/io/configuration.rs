//! Algorithm constants and runtime configuration defaults

/// Dead-locus entries tolerated before a pruning pass triggers
pub const DEAD_LOCUS_PRUNE_THRESHOLD: usize = 10_000;

/// Stop recording rotated locus signatures once one exceeds this many
/// boundary entries
pub const LOCUS_RECORD_CUTOFF: usize = 8;

/// Backtrack depth distribution shift
pub const BACKTRACK_ALPHA: f64 = 1.0;

/// Backtrack depth distribution sharpness
pub const BACKTRACK_BETA: f64 = 2.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum iterations before stopping
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

/// Default assembly region width in cells
pub const DEFAULT_REGION_WIDTH: i32 = 40;

/// Default assembly region height in cells
pub const DEFAULT_REGION_HEIGHT: i32 = 40;

/// Known-good tile sets usable as presets and test fixtures
///
/// Each entry is a tile-set specification in the standard text syntax.
pub const CATALOGUE: &[&str] = &[
    "--33Aa -33-Aa",
    "ab-A-- B--C-- B--c-- B--D-- B--d--",
    "d-D-4- d--D-- 44----",
    "AaAa--",
    "aA---- AaAa--",
    "---bB- bAaB-- aAaA--",
    "B-Aa-- b--Aa-",
    "44---- 11--4-",
    "3-3-3- 33----",
    "1-1-1- 2--12-",
    "-a---- a-AA--",
    "-AAaa- a--A--",
    "-a-A-- Aaa--A",
    "a--a-- -aAA-A",
    "A-A-a- a-a---",
    "-22-22 22----",
    "-Aaa-- A1A--- a-1AAa",
    "--bB1- -b--B-",
    "212111 -1-2--",
    "-a-a-a ---A-A",
    "-Dd-cA ---d-D ---a-C",
    "A-1-1- a1---B b--1--",
    "a-1-A- a--A--",
    "acaACA acbBCB bcaBCB bcbACA",
    "A--ab- B-ab-- A--a-- B--b-- ABd--D name=Tree",
    "-111",
    "abA- B-C- B-c- B-D- B-d-",
    "4A4a --a4 -A-B --Ab",
    "acAC adBD bcBD bdAC",
    "1111 ---1",
    "-bbb --BB",
    "1B1B a-A- -bA- ab-B",
];
