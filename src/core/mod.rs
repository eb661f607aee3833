//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The path → content model (PathContentMap)
//! - The failure taxonomy
//! - Key construction for walked paths
//! - Text file reading policies
//! - JSON rendering
//! - Logging setup

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
