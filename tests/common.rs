//! Shared test helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

pub const MARKER: &str = "# do not edit; managed by github.com/felixge/hosts";

/// Managed line for `hosts`, commented out unless `blocked`.
pub fn managed_line(hosts: &str, blocked: bool) -> String {
    let prefix = if blocked { "" } else { "# " };
    format!("{prefix}127.0.0.1 {hosts} {MARKER}")
}

/// Create a temp dir holding a `hosts` file with `content`.
pub fn temp_hosts(content: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("hosts_test_")
        .tempdir()
        .expect("temp dir");
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).expect("write hosts");
    (dir, path)
}
