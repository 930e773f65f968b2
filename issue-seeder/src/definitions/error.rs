//! Definition file error types.

use thiserror::Error;

/// Errors that can occur while locating or reading definition files.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Failed to read a file or directory.
    #[error("Failed to read '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The definitions directory does not exist.
    #[error("Definitions directory not found: {path}")]
    MissingDirectory { path: String },
}
