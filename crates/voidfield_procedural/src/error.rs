//! # World Error Types
//!
//! Generation itself is total: any seed yields a valid body. Errors only
//! exist at the host interface, where untrusted input enters.

use thiserror::Error;

/// Errors that can occur at the world interface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    /// A destination request carried an empty or whitespace-only name.
    #[error("destination name is empty")]
    EmptyDestinationName,

    /// A destination request carried a NaN or infinite coordinate.
    #[error("destination coordinate is not finite: ({x}, {y})")]
    NonFiniteCoordinate {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },

    /// Configuration file failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
