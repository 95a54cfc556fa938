//! Errors that abort a conversion run instead of being reported per file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the per-file failure boundary.
///
/// Per-file load and write problems never show up here: they are folded into a
/// [`ConversionResult`](super::ConversionResult) so the walk can continue.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested output format is not registered.
    #[error("file format not found: '{format}' (available: {available})")]
    UnknownFormat {
        /// The identifier that was requested
        format: String,
        /// Comma-separated list of registered identifiers
        available: String,
    },

    /// The parent directory of a destination file could not be created.
    #[error("failed to create output directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
