//! Error types for oxpick

use thiserror::Error;

use crate::icc::IccError;

/// Result type for oxpick operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxpick operations
///
/// Numeric conversions are total and never produce these; only profile
/// import and configuration can fail.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// ICC profile could not be imported
    #[error("ICC import failed: {0}")]
    Icc(#[from] IccError),

    /// Rejected engine options
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icc_error_message_is_kept() {
        let err: Error = IccError::LutBased.into();
        let msg = err.to_string();
        assert!(msg.starts_with("ICC import failed: "), "{}", msg);
        assert!(msg.contains("not a matrix-based RGB profile"), "{}", msg);
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err: Error = IccError::CorruptedData("tag table".into()).into();
        assert!(err.source().is_some());
    }
}
