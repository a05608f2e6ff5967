//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docprops operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Converted text cannot be represented in the file's encoding
    #[error("Cannot encode text as {0}")]
    Encode(String),

    /// Conversion requested towards a style that cannot be produced
    #[error("Invalid conversion target: {0}")]
    InvalidTarget(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a file system error wrapping the underlying I/O failure
    pub fn file_system_io(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Whether the error means the input simply is not there
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileSystem {
                source: Some(source),
                ..
            }
            | Self::Io(source) => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_display() {
        let err = Error::file_system("cannot read", "/tmp/missing.rs");
        assert_eq!(err.to_string(), "File system error: cannot read");
    }

    #[test]
    fn test_not_found_detection() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::file_system_io("cannot read", "/tmp/x", io);
        assert!(err.is_not_found());
        assert!(!Error::Configuration("bad".into()).is_not_found());
    }
}
