//! Error types for ovfdeploy
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for options loading
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors raised while resolving a deployment options payload
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Both a file path and an inline payload were supplied
    #[error("only one options spec could be specified")]
    ConflictingSources,

    /// The options file could not be opened
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON for the options shape
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl OptionsError {
    /// Underlying I/O error kind, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
