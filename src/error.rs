//! Error types for the avoidance core.

use thiserror::Error;

/// Errors raised when validating the decision core's inputs or configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvoidanceError {
    /// A sector layout with an even count has no centre sector.
    #[error("sector count must be odd, got {0}")]
    EvenSectors(usize),

    /// The forward window needs the centre sector and both of its neighbours.
    #[error("sector count must be at least 3, got {0}")]
    TooFewSectors(usize),

    /// A configuration value the decision logic cannot operate with.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AvoidanceError>;
