//! Error types for U-Pallet.

use thiserror::Error;

/// Result type alias for U-Pallet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building layers and pallet solutions.
///
/// A container too small for a single box is not an error: patterns report
/// it through the `feasible` flag of their layer dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Unrecognized or degenerate principal axis.
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),

    /// A required reference was not set before use.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Invalid box dimensions provided.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid container or pallet dimensions provided.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidAxis("(1, 1, 0)".into());
        assert_eq!(err.to_string(), "Invalid axis: (1, 1, 0)");

        let err = Error::Precondition("analysis context is not set".into());
        assert_eq!(
            err.to_string(),
            "Precondition failed: analysis context is not set"
        );
    }
}
