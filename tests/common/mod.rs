//! Shared test utilities for shprust integration tests.
//!
//! Test crates import these via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use std::path::PathBuf;

/// Resolve a path under the system temp directory, unique per test name.
pub fn temp_shp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("shprust_{}_{}.shp", name, std::process::id()))
}
