//! Error types for the pagelint library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagelint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a layout audit.
///
/// Only failures to obtain the document content are fatal; every per-page
/// condition (no plausible content, malformed region geometry) is handled
/// locally by skipping or dropping, never through this enum.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page-content hand-off could not be parsed.
    #[error("unreadable document {}: {reason}", path.display())]
    UnreadableDocument {
        /// The input that failed to parse
        path: PathBuf,
        /// Underlying parse failure
        reason: String,
    },

    /// The configuration is not usable (negative margin or tolerance,
    /// unknown alignment mode, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an [`Error::UnreadableDocument`] from a serde failure.
    pub(crate) fn unreadable(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        Error::UnreadableDocument {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfig("left margin is negative".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: left margin is negative"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_unreadable_names_input() {
        let bad = serde_json::from_str::<u32>("oops").unwrap_err();
        let err = Error::unreadable("pages.json", bad);
        assert!(err.to_string().contains("pages.json"));
    }
}
