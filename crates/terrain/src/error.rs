//! Error types for terrain generation.

use thiserror::Error;

/// Failure conditions raised by the generation pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lookup outside the declared grid. Never expected during a validated
    /// generation run; treat as a defect rather than a recoverable condition.
    #[error("Index ({x}, {y}) out of range for {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
