//! Custom error types for favicon-forge.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the favicon-forge library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load the source logo.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write a PNG output.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an ICO output.
    #[error("failed to write icon to {path}: {source}")]
    IconWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// One or more favicons could not be written.
    #[error("{failed} of {total} favicons failed")]
    IncompleteSet { failed: usize, total: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for favicon-forge operations.
pub type Result<T> = std::result::Result<T, Error>;
