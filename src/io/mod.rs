//! Construction layer and command-line wiring
//!
//! Everything here stays outside the engine: tile-set text parsing, typed
//! configuration, error types, and the CLI driver. The engine receives only
//! validated, typed inputs and never raises errors of its own.

/// Command-line interface and run driver
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types for the construction layer
pub mod error;
/// Run progress reporting
pub mod progress;
/// Tile-set text syntax and typed configuration
pub mod tileset;
