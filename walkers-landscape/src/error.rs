//! Error types for landscape construction and evaluation.

use thiserror::Error;

/// Errors raised while building or evaluating a benchmark landscape.
#[derive(Debug, Error)]
pub enum LandscapeError {
    /// The landscape only exists for a fixed dimensionality, or needs more dimensions.
    #[error("{name} does not support dim={requested} ({supported})")]
    UnsupportedDimension {
        /// Landscape name
        name: &'static str,
        /// Requested dimensionality
        requested: usize,
        /// Human-readable description of the supported dimensionalities
        supported: String,
    },

    /// No landscape in the catalog matches the requested name.
    #[error("unknown landscape '{name}'; available: {available}")]
    UnknownLandscape {
        /// Name that was looked up
        name: String,
        /// Comma separated list of valid names
        available: String,
    },

    /// A batch of candidates does not have `dim` entries along the evaluation axis.
    #[error("batch evaluation expects lanes of length {expected} along axis {axis}, got {got}")]
    BatchShapeMismatch {
        /// Dimensionality of the landscape
        expected: usize,
        /// Lane length found in the batch
        got: usize,
        /// Axis index the candidates were read along
        axis: usize,
    },
}

/// A specialized `Result` type for landscape operations.
pub type Result<T> = std::result::Result<T, LandscapeError>;

impl LandscapeError {
    /// Returns `true` for dimension or shape problems.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            LandscapeError::UnsupportedDimension { .. } | LandscapeError::BatchShapeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LandscapeError::UnsupportedDimension {
            name: "Booth",
            requested: 3,
            supported: "exactly 2".to_string(),
        };
        assert_eq!(err.to_string(), "Booth does not support dim=3 (exactly 2)");
    }

    #[test]
    fn test_is_dimension_error() {
        let shape = LandscapeError::BatchShapeMismatch {
            expected: 2,
            got: 3,
            axis: 1,
        };
        let unknown = LandscapeError::UnknownLandscape {
            name: "foo".to_string(),
            available: "Ackley".to_string(),
        };
        assert!(shape.is_dimension_error());
        assert!(!unknown.is_dimension_error());
    }
}
