//! Error types for the engine surface.

use std::fmt;

/// Error type for search failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The side asked to move has no legal move (checkmate or stalemate)
    NoValidMoves,
    /// A background search thread panicked before producing a move
    SearchAborted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoValidMoves => write!(f, "No valid moves available"),
            EngineError::SearchAborted => write!(f, "Search thread terminated abnormally"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Error type for textual option updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// No option with this name
    UnknownOption { name: String },
    /// The value could not be parsed for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}
