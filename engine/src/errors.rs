//! Error types for the weight simulator engine

use thiserror::Error;

/// Engine-wide error type.
///
/// The projection math is total over all real-number inputs, so the only
/// failure mode is an unrecognized enum token at a parsing boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
