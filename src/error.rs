//! Error types for Quickplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Quickplot operations.
pub type Result<T> = std::result::Result<T, QuickplotError>;

/// Errors that can occur in Quickplot.
#[derive(Debug, Error)]
pub enum QuickplotError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Label not present in the collection.
    #[error("Label not found: {label}")]
    LabelNotFound { label: String },

    /// Input record that is not a label followed by two numeric fields.
    #[error("Malformed record on line {line}: {content}")]
    MalformedRecord { line: usize, content: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuickplotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a LabelNotFound error.
    pub fn label_not_found(label: impl Into<String>) -> Self {
        Self::LabelNotFound {
            label: label.into(),
        }
    }

    /// Create a MalformedRecord error.
    pub fn malformed_record(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            content: content.into(),
        }
    }
}
