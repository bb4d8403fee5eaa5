//! Error types for quote location and highlight geometry.
//!
//! A quote that cannot be found is not an error: the locator reports it as `None`
//! and the highlighter as an empty rectangle list. The variants here cover contract
//! violations and bad caller input only.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building highlights.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// Match range does not fit the fragment sequence
    #[error("Invalid match range {start}..={end} for {len} fragments")]
    InvalidRange {
        /// First fragment index of the range
        start: usize,
        /// Last fragment index of the range (inclusive)
        end: usize,
        /// Number of fragments the range was applied to
        len: usize,
    },

    /// Viewport dimensions or scale are unusable
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_error() {
        let err = Error::InvalidRange {
            start: 3,
            end: 7,
            len: 5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3..=7"));
        assert!(msg.contains("5 fragments"));
    }

    #[test]
    fn test_invalid_viewport_error() {
        let err = Error::InvalidViewport("height must be positive, got -1".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid viewport"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(format!("{}", err).starts_with("JSON error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
