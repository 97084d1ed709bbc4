//! Shared test utilities for execute and integration tests.
//!
//! This module provides common helpers used across command execute tests.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::db::DumpSource;

/// Create a temporary file containing the given content.
///
/// Used to create schema dump and config files on disk.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Build an in-memory dump source from JSON content.
///
/// This is the standard setup for execute tests.
pub fn dump_source(json_content: &str) -> DumpSource {
    DumpSource::from_json_str(json_content).expect("Dump should parse")
}

/// Run `f` with the process working directory set to `dir`.
///
/// Callers must be `#[serial]`: the working directory is process-global.
pub fn in_dir<F: FnOnce() -> R, R>(dir: &Path, f: F) -> R {
    let original = std::env::current_dir().expect("Failed to read current dir");
    std::env::set_current_dir(dir).expect("Failed to enter dir");
    let result = f();
    std::env::set_current_dir(original).expect("Failed to restore dir");
    result
}
