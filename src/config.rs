//! Configuration for the managed hosts file.
//!
//! The binary only ever overrides the file path (`--file`); block IP, marker
//! and buffer size stay at their defaults outside of tests.

use std::path::{Path, PathBuf};

/// Default hosts file location.
pub const DEFAULT_HOSTS_PATH: &str = "/etc/hosts";

/// Address managed entries point at when blocked.
pub const DEFAULT_BLOCK_IP: &str = "127.0.0.1";

/// Trailing comment that marks a line as ours.
pub const DEFAULT_MARKER: &str = "# do not edit; managed by github.com/felixge/hosts";

/// Reader buffer size. A line plus its terminator must fit in it.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsConfig {
    pub path: PathBuf,
    pub block_ip: String,
    pub marker: String,
    pub read_buffer_size: usize,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HOSTS_PATH),
            block_ip: DEFAULT_BLOCK_IP.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl HostsConfig {
    /// Default config pointed at another hosts file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Config for testing: use a scratch file instead of /etc/hosts.
    pub fn for_test(path: impl AsRef<Path>) -> Self {
        Self::from_path(path.as_ref().to_path_buf())
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_block_ip(mut self, ip: impl Into<String>) -> Self {
        self.block_ip = ip.into();
        self
    }

    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }
}
