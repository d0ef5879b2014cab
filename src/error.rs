//! Error types for the cvforge library.

use std::io;
use thiserror::Error;

/// Result type alias for cvforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or exporting a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding a value as JSON.
    #[error("JSON encoding error: {0}")]
    Json(String),

    /// An entry with the same normalized value already exists in a section.
    #[error("Duplicate {section} entry: {value}")]
    DuplicateEntry {
        /// Section the entry was added to.
        section: &'static str,
        /// The rejected value, as submitted.
        value: String,
    },

    /// An empty or whitespace-only value was submitted to a list section.
    #[error("Blank {section} entry rejected")]
    BlankEntry {
        /// Section the entry was added to.
        section: &'static str,
    },

    /// The rendered surface capture could not be decoded.
    #[error("Surface capture error: {0}")]
    Surface(String),

    /// Error assembling the export output.
    #[error("Export error: {0}")]
    Export(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DuplicateEntry {
            section: "hobbies",
            value: "Reading".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate hobbies entry: Reading");

        let err = Error::BlankEntry {
            section: "accomplishments",
        };
        assert_eq!(err.to_string(), "Blank accomplishments entry rejected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
