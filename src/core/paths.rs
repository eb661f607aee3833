//! Key construction for walked files
//!
//! A key is either the root joined with the file's path below it (the default,
//! e.g. `./sub/b.txt`), or the bare relative path normalized to '/' separators.

use std::path::{Component, Path};

use crate::core::error::{DirJsonError, Result};

/// How map keys are spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Root joined with the relative path, platform separator
    #[default]
    Joined,
    /// Relative to the root, always '/' separated
    Relative,
}

impl std::str::FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joined" => Ok(PathStyle::Joined),
            "relative" => Ok(PathStyle::Relative),
            _ => Err(format!("Unknown path style: {}", s)),
        }
    }
}

/// Spell a path with '/' between components.
///
/// Only real component boundaries become '/', so a '\\' inside a Unix file
/// name is kept as is. Returns `None` when a component is not valid UTF-8.
pub fn normalize_path(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .map(|component| match component {
            Component::RootDir => Some(""),
            other => other.as_os_str().to_str(),
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Build the map key for a file found under `root`.
///
/// `path` is the path as produced by the walk, i.e. already `root` joined with
/// the directory segments and the file name. A path that is not valid UTF-8
/// is an error, never a lossy key.
pub fn key_for(path: &Path, root: &Path, style: PathStyle) -> Result<String> {
    let key = match style {
        PathStyle::Joined => path.to_str().map(str::to_owned),
        PathStyle::Relative => normalize_path(path.strip_prefix(root).unwrap_or(path)),
    };
    key.ok_or_else(|| DirJsonError::InvalidPath {
        path: path.to_path_buf(),
    })
}
