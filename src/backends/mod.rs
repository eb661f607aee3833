//! Backends module - Filesystem operations
//!
//! Provides:
//! - walk: Recursive directory serialization with walkdir

pub mod walk;
