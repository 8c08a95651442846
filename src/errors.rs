//! Error types for relato's I/O surfaces.
//!
//! The rendering core is infallible by design: unknown formats and roles
//! degrade to empty sections and standard-user filtering. Errors only arise
//! at the edges, when loading a request from disk or writing the finished
//! report, and those are categorized here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelatoError {
    /// File system failures while reading a request or writing a report.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The request file exists but is not a valid report request.
    #[error("invalid report request in {path}: {source}")]
    Request {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RelatoError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RelatoError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn request(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        RelatoError::Request {
            path: path.into(),
            source,
        }
    }
}
