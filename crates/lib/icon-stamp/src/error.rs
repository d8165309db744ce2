//! Stamp pipeline errors.

use std::path::PathBuf;

/// Error returned while loading the icon image.
#[derive(Debug, thiserror::Error)]
#[error("could not load file {path}: {source}")]
pub struct LoadError {
    /// Path to the input image.
    pub path: PathBuf,

    /// Underlying decoding or I/O error.
    #[source]
    pub source: image::ImageError,
}

/// Error returned while encoding the stamped image.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode PNG: {0}")]
pub struct EncodeError(#[source] pub image::ImageError);

/// Error returned while saving the stamped image.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// Failed to encode the image.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Failed to create the temporary output file.
    #[error("failed to create temporary file next to {path}: {source}")]
    Create {
        /// Path to the output file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the encoded image.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path to the output file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the written file into place.
    #[error("failed to replace {path}: {source}")]
    Persist {
        /// Path to the output file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
