//! Error types for tile-set construction and CLI operations

use std::fmt;

/// Main error type for construction-layer operations
///
/// The assembly engine itself reports exhaustion only through
/// `iterate() -> false`; every variant here originates in parsing or
/// parameter validation before an engine exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// The tile-set specification contained no forms
    EmptyTileSet,

    /// A form's length does not match the connection topology
    FormLength {
        /// Position of the form in the specification (1-based)
        index: usize,
        /// The offending form text
        form: String,
        /// Edge count required by the topology
        expected: usize,
    },

    /// A form used a symbol outside the edge alphabet
    UnknownEdgeSymbol {
        /// Position of the form in the specification (1-based)
        index: usize,
        /// The offending form text
        form: String,
        /// The unrecognized symbol
        symbol: char,
    },

    /// No topology exists for the given form length
    UnsupportedEdgeCount {
        /// Edge count of the first form
        length: usize,
    },

    /// A named option was present but its value failed to parse
    InvalidOption {
        /// Option name
        option: String,
        /// Provided value
        value: String,
        /// Explanation of the failure
        reason: String,
    },

    /// A named option is not in the parser table
    UnknownOption {
        /// Option name as written
        option: String,
    },

    /// Complement pairs do not form a valid involution
    InvalidAlphabet {
        /// Description of the inconsistency
        reason: String,
    },

    /// Requested catalogue entry does not exist
    CatalogueIndex {
        /// Requested index
        index: usize,
        /// Number of catalogue entries
        size: usize,
    },

    /// Neither a tile-set specification nor a catalogue entry was given
    MissingTileSet,
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTileSet => {
                write!(f, "Tile-set specification contains no forms")
            }
            Self::FormLength {
                index,
                form,
                expected,
            } => {
                write!(
                    f,
                    "Form #{index} ('{form}') must have exactly {expected} edges"
                )
            }
            Self::UnknownEdgeSymbol {
                index,
                form,
                symbol,
            } => {
                write!(
                    f,
                    "Form #{index} ('{form}') uses unknown edge symbol '{symbol}'"
                )
            }
            Self::UnsupportedEdgeCount { length } => {
                write!(
                    f,
                    "No topology for forms of length {length} (expected 4 or 6 edges)"
                )
            }
            Self::InvalidOption {
                option,
                value,
                reason,
            } => {
                write!(f, "Invalid option '{option}' = '{value}': {reason}")
            }
            Self::UnknownOption { option } => {
                write!(f, "Unknown option '{option}'")
            }
            Self::InvalidAlphabet { reason } => {
                write!(f, "Invalid edge alphabet: {reason}")
            }
            Self::CatalogueIndex { index, size } => {
                write!(
                    f,
                    "Catalogue entry {index} does not exist ({size} entries available)"
                )
            }
            Self::MissingTileSet => {
                write!(
                    f,
                    "No tile set given; pass a specification or --catalogue <index>"
                )
            }
        }
    }
}

impl std::error::Error for AssemblyError {}

/// Convenience type alias for construction-layer results
pub type Result<T> = std::result::Result<T, AssemblyError>;
