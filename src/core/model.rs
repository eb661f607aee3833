//! Path → content model
//!
//! `PathContentMap` is the only data structure the serializer builds. It keeps
//! entries in insertion order so output follows traversal order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::core::error::{DirJsonError, Result};

/// Insertion-ordered mapping from file path to file text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathContentMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PathContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path/content pair. Keys are unique; a repeated key is an error
    /// and leaves the map unchanged.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Result<()> {
        let path = path.into();
        if self.get(&path).is_some() {
            return Err(DirJsonError::DuplicateKey { key: path });
        }

        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, content.into()));
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.index
            .get(path)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    /// Total content size in bytes
    pub fn content_bytes(&self) -> usize {
        self.iter().map(|(_, content)| content.len()).sum()
    }
}

impl Serialize for PathContentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (path, content) in self.iter() {
            map.serialize_entry(path, content)?;
        }
        map.end()
    }
}
