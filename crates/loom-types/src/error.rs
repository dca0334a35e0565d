//! Error types for the loom engine.
//!
//! All crates return `LoomResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the loom engine.
#[derive(Debug, Error)]
pub enum LoomError {
    /// Grid dimensions or extent cannot produce a cloth lattice.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A particle index or grid coordinate is out of range.
    #[error("Invalid particle: {0}")]
    InvalidParticle(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Render backend or exporter failure.
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience alias for `Result<T, LoomError>`.
pub type LoomResult<T> = Result<T, LoomError>;
