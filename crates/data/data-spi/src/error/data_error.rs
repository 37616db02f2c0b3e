//! Data error types.

use thiserror::Error;

/// Dataset and asset errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// File could not be opened or read
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// CSV content could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File has no header row
    #[error("No header row in {0}")]
    MissingHeader(String),

    /// Image could not be decoded
    #[error("Failed to decode image {path}: {reason}")]
    DecodeFailed { path: String, reason: String },
}

impl DataError {
    pub fn read_failed(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Self::ReadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failed_error() {
        let error = DataError::read_failed("Superstore.csv", "No such file or directory");
        assert_eq!(
            error.to_string(),
            "Failed to read Superstore.csv: No such file or directory"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = DataError::ParseError("unequal lengths".to_string());
        assert_eq!(error.to_string(), "Parse error: unequal lengths");
    }

    #[test]
    fn test_missing_header_error() {
        let error = DataError::MissingHeader("empty.csv".to_string());
        assert_eq!(error.to_string(), "No header row in empty.csv");
    }

    #[test]
    fn test_decode_failed_error() {
        let error = DataError::DecodeFailed {
            path: "heatmat.png".to_string(),
            reason: "invalid signature".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to decode image heatmat.png: invalid signature"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = DataError::ParseError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ParseError"));
        assert!(debug_str.contains("test"));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(DataError::ParseError("test".to_string()));
        assert_eq!(error.to_string(), "Parse error: test");
    }
}
