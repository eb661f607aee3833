//! Directory serializer
//!
//! Walks the root with walkdir and collects every file's text into a
//! PathContentMap. Within a directory, files come before subdirectories and
//! both are sorted by name, so output is stable across runs.

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::DirJsonError;
use crate::core::file_reader::{read_text_file, FileReadConfig};
use crate::core::model::PathContentMap;
use crate::core::paths::{key_for, PathStyle};
use crate::core::render::{RenderConfig, Renderer};

/// Options for one serializer run
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeConfig {
    pub path_style: PathStyle,
    pub read: FileReadConfig,
    /// Descend into symlinked directories
    pub follow_links: bool,
}

/// Files first, then directories, each group by file name
fn traversal_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk `root` and read every file below it.
///
/// The first failure aborts the walk; the partial map is dropped.
pub fn dir_to_map(root: &Path, config: &SerializeConfig) -> Result<PathContentMap, DirJsonError> {
    let metadata = fs::metadata(root).map_err(|source| DirJsonError::Read {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DirJsonError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by(traversal_order);

    let mut map = PathContentMap::new();

    for entry in walker {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();

        // Unfollowed link to a directory: neither a file nor walked into
        if entry.path_is_symlink() && !config.follow_links && path.is_dir() {
            tracing::debug!(path = %path.display(), "not descending into symlinked directory");
            continue;
        }

        let Some(content) = read_text_file(path, &config.read)? else {
            continue;
        };

        tracing::debug!(path = %path.display(), bytes = content.len(), "read file");
        map.insert(key_for(path, root, config.path_style)?, content)?;
    }

    if map.is_empty() {
        tracing::debug!(root = %root.display(), "no files found");
    }

    tracing::info!(
        root = %root.display(),
        files = map.len(),
        bytes = map.content_bytes(),
        "directory serialized"
    );

    Ok(map)
}

/// Serialize `root` and print the JSON document to stdout
pub fn run_dump(root: &Path, config: &SerializeConfig, render_config: RenderConfig) -> Result<()> {
    let map = dir_to_map(root, config)
        .with_context(|| format!("Failed to serialize directory {}", root.display()))?;

    let renderer = Renderer::with_config(render_config);
    renderer
        .render_to(&map, std::io::stdout().lock())
        .context("Failed to write JSON to stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::file_reader::EncodingStrategy;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn keys(map: &PathContentMap) -> Vec<&str> {
        map.iter().map(|(path, _)| path).collect()
    }

    fn relative() -> SerializeConfig {
        SerializeConfig {
            path_style: PathStyle::Relative,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_dir() {
        let temp = tempdir().unwrap();
        let map = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_empty_subdirectories_contribute_nothing() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        fs::create_dir(temp.path().join("d")).unwrap();

        let map = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_single_file_joined_key() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let map = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap();
        let key = temp.path().join("a.txt").to_string_lossy().into_owned();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&key), Some("hello"));
    }

    #[test]
    fn test_nested_file_relative_key() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("sub/dir")).unwrap();
        fs::write(temp.path().join("sub/dir/b.txt"), "nested").unwrap();

        let map = dir_to_map(temp.path(), &relative()).unwrap();
        assert_eq!(map.get("sub/dir/b.txt"), Some("nested"));
    }

    #[test]
    fn test_empty_file_maps_to_empty_string() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("empty.txt")).unwrap();

        let map = dir_to_map(temp.path(), &relative()).unwrap();
        assert_eq!(map.get("empty.txt"), Some(""));
    }

    #[test]
    fn test_files_before_subdirectories_sorted_by_name() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::create_dir_all(temp.path().join("m/n")).unwrap();
        fs::write(temp.path().join("z.txt"), "z").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a/inner.txt"), "i").unwrap();
        fs::write(temp.path().join("m/n/deep.txt"), "d").unwrap();
        fs::write(temp.path().join("m/top.txt"), "t").unwrap();

        let map = dir_to_map(temp.path(), &relative()).unwrap();
        assert_eq!(
            keys(&map),
            vec!["b.txt", "z.txt", "a/inner.txt", "m/top.txt", "m/n/deep.txt"]
        );
    }

    #[test]
    fn test_invalid_utf8_aborts_walk() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "fine").unwrap();
        fs::write(temp.path().join("b.bin"), [0xc3, 0x28]).unwrap();

        let err = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap_err();
        assert!(matches!(err, DirJsonError::Decode { .. }));
    }

    #[test]
    fn test_invalid_utf8_skipped_when_configured() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "fine").unwrap();
        fs::write(temp.path().join("b.bin"), [0xc3, 0x28]).unwrap();

        let mut config = relative();
        config.read.encoding_strategy = EncodingStrategy::Skip;

        let map = dir_to_map(temp.path(), &config).unwrap();
        assert_eq!(keys(&map), vec!["a.txt"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = tempdir().unwrap();
        let err =
            dir_to_map(&temp.path().join("missing"), &SerializeConfig::default()).unwrap_err();
        assert!(matches!(err, DirJsonError::Read { .. }));
    }

    #[test]
    fn test_root_that_is_a_file_is_error() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let err = dir_to_map(&file, &SerializeConfig::default()).unwrap_err();
        assert!(matches!(err, DirJsonError::NotADirectory(_)));
    }

    #[test]
    fn test_idempotent() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("x/y")).unwrap();
        fs::write(temp.path().join("x/y/one.txt"), "1").unwrap();
        fs::write(temp.path().join("two.txt"), "2").unwrap();

        let first = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap();
        let second = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_read_through() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("target.txt"), "via link").unwrap();
        std::os::unix::fs::symlink(temp.path().join("target.txt"), temp.path().join("link.txt"))
            .unwrap();

        let map = dir_to_map(temp.path(), &relative()).unwrap();
        assert_eq!(map.get("link.txt"), Some("via link"));
        assert_eq!(map.get("target.txt"), Some("via link"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dir_not_followed_by_default() {
        let temp = tempdir().unwrap();
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("far.txt"), "far").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

        let map = dir_to_map(temp.path(), &relative()).unwrap();
        assert!(map.is_empty());

        let mut config = relative();
        config.follow_links = true;
        let map = dir_to_map(temp.path(), &config).unwrap();
        assert_eq!(map.get("linked/far.txt"), Some("far"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_aborts_walk() {
        let temp = tempdir().unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling"))
            .unwrap();

        let err = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap_err();
        assert!(matches!(err, DirJsonError::Read { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_is_not_regular_file() {
        let temp = tempdir().unwrap();
        let _listener = std::os::unix::net::UnixListener::bind(temp.path().join("sock")).unwrap();

        let err = dir_to_map(temp.path(), &SerializeConfig::default()).unwrap_err();
        assert!(matches!(err, DirJsonError::NotRegularFile { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_names_abort_walk() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"a\xff")), "first").unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"a\xfe")), "second").unwrap();

        for config in [SerializeConfig::default(), relative()] {
            let err = dir_to_map(temp.path(), &config).unwrap_err();
            assert!(matches!(err, DirJsonError::InvalidPath { .. }));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_name_does_not_collide_with_subdirectory() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a\\b.txt"), "backslash name").unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("a/b.txt"), "nested file").unwrap();

        let map = dir_to_map(temp.path(), &relative()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a\\b.txt"), Some("backslash name"));
        assert_eq!(map.get("a/b.txt"), Some("nested file"));
    }
}
