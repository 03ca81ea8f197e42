//! Error types for the postage engine
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using PostageError
pub type Result<T> = std::result::Result<T, PostageError>;

/// Unified error type for postage operations
#[derive(Debug, Error)]
pub enum PostageError {
    // Dimension errors
    #[error("Dimension error: {0}")]
    Dimension(#[from] DimensionError),

    // Zone errors
    #[error("Zone error: {0}")]
    Zone(#[from] ZoneError),

    // Input parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(String),
}

/// Item dimension errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Zip code and zone resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("Zip code {zip} is outside the range {min}..={max}")]
    OutOfRangeZip { zip: i64, min: u32, max: u32 },

    #[error("Zone partition is invalid: {0}")]
    InvalidPartition(String),
}

impl PostageError {
    /// True for failures caused by the caller's input rather than by configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PostageError::Dimension(_)
                | PostageError::Zone(ZoneError::OutOfRangeZip { .. })
                | PostageError::Parse(_)
        )
    }
}

impl From<serde_json::Error> for PostageError {
    fn from(err: serde_json::Error) -> Self {
        PostageError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for PostageError {
    fn from(err: std::io::Error) -> Self {
        PostageError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PostageError::Dimension(DimensionError::Negative {
            name: "height",
            value: -1.5,
        });
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_zone_error() {
        let err = ZoneError::OutOfRangeZip {
            zip: 0,
            min: 1,
            max: 99999,
        };
        assert!(err.to_string().contains("1..=99999"));
    }

    #[test]
    fn test_input_error_classification() {
        let zip: PostageError = ZoneError::OutOfRangeZip {
            zip: 100000,
            min: 1,
            max: 99999,
        }
        .into();
        assert!(zip.is_input_error());
        assert!(!PostageError::Config("missing tariff".into()).is_input_error());
    }
}
