//! Failure taxonomy
//!
//! Every failure is a "file access or decode error". The variants only name
//! the concrete cause; none of them is recovered from.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirJsonError {
    /// Directory enumeration failed (missing root, unreadable directory, ...)
    #[error("failed to walk directory tree")]
    Walk(#[from] walkdir::Error),

    /// The root exists but is not a directory
    #[error("walk root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// FIFOs, sockets and device nodes are refused instead of opened
    #[error("{} is not a regular file", path.display())]
    NotRegularFile { path: PathBuf },

    /// A file name that cannot be spelled as a UTF-8 key
    #[error("path is not valid UTF-8: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// Two files produced the same key
    #[error("duplicate key {key:?}")]
    DuplicateKey { key: String },

    #[error("failed to encode JSON output")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output")]
    Write(#[source] std::io::Error),
}

pub type Result<T, E = DirJsonError> = std::result::Result<T, E>;
