//! Error types for wordlist generation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorphError {
    #[error("Base word must not be empty")]
    EmptyBaseWord,

    #[error("Invalid base word {0:?}: line breaks are not allowed")]
    InvalidBaseWord(String),

    #[error("Too many random variants requested: {0} (max {})", crate::mutate::MAX_RANDOM_VARIANTS)]
    TooManyVariants(usize),

    #[error("Invalid size format: '{0}'")]
    InvalidSize(String),

    #[error("Failed to write {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to the console")]
    Display(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MorphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_io_error_shown_once() {
        let err = MorphError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "disk full");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_output_error_keeps_cause() {
        let err = MorphError::Output {
            path: PathBuf::from("morph.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write \"morph.txt\"");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("denied"));
    }
}
