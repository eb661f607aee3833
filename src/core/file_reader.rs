//! Text file reading
//!
//! Provides consistent handling for:
//! - Non-UTF-8 files (fail, skip, or lossy conversion)
//! - Line endings (kept verbatim or translated to '\n')
//! - Non-regular files (refused before opening)

use std::fs;
use std::path::Path;

use crate::core::error::{DirJsonError, Result};

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Abort the whole operation
    #[default]
    Error,
    /// Leave the file out of the map
    Skip,
    /// Replace invalid sequences with U+FFFD
    Lossy,
}

impl std::str::FromStr for EncodingStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(EncodingStrategy::Error),
            "skip" => Ok(EncodingStrategy::Skip),
            "lossy" => Ok(EncodingStrategy::Lossy),
            _ => Err(format!("Unknown encoding strategy: {}", s)),
        }
    }
}

/// Line ending handling
///
/// `Keep` is the default so content round-trips byte for byte. `Universal`
/// matches a text-mode read that translates line endings on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineMode {
    #[default]
    Keep,
    /// "\r\n" and lone "\r" become "\n"
    Universal,
}

impl std::str::FromStr for NewlineMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(NewlineMode::Keep),
            "universal" => Ok(NewlineMode::Universal),
            _ => Err(format!("Unknown newline mode: {}", s)),
        }
    }
}

/// Configuration for file reading
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReadConfig {
    pub encoding_strategy: EncodingStrategy,
    pub newline_mode: NewlineMode,
}

/// Read a whole file as text.
///
/// Returns `Ok(None)` only when the file is invalid UTF-8 and the strategy is
/// [`EncodingStrategy::Skip`]. Every I/O failure is an error.
pub fn read_text_file(path: &Path, config: &FileReadConfig) -> Result<Option<String>> {
    // Follows symlinks, so a link to a regular file passes and a dangling one fails
    let metadata = fs::metadata(path).map_err(|source| DirJsonError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(DirJsonError::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| DirJsonError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(source) => match config.encoding_strategy {
            EncodingStrategy::Error => {
                return Err(DirJsonError::Decode {
                    path: path.to_path_buf(),
                    source,
                });
            }
            EncodingStrategy::Skip => {
                tracing::warn!(path = %path.display(), "skipping file with invalid UTF-8");
                return Ok(None);
            }
            EncodingStrategy::Lossy => {
                tracing::warn!(path = %path.display(), "lossy UTF-8 conversion applied");
                String::from_utf8_lossy(source.as_bytes()).into_owned()
            }
        },
    };

    Ok(Some(match config.newline_mode {
        NewlineMode::Keep => content,
        NewlineMode::Universal => translate_newlines(&content),
    }))
}

/// Translate "\r\n" and lone "\r" to "\n"
fn translate_newlines(s: &str) -> String {
    if !s.contains('\r') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}
