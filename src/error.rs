//! Error kinds surfaced by the hosts file operations.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HostsError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line index is 1-based; `content` is what was read before giving up.
    #[error("line too long: {line}: {content}")]
    LineTooLong { line: usize, content: String },

    /// Block IP or marker produced a pattern the regex engine rejects
    /// (e.g. exceeds its size limit).
    #[error("invalid managed-line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

impl HostsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
