//! Error types for pbx-sync

use std::path::PathBuf;

/// Result type for pbx-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing a project tree.
///
/// All are fail-fast: a sync call aborts on the first error and performs
/// no rollback of sandbox files copied up to that point.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("group '{group}' already has a child named '{name}'")]
    DuplicateEntry { group: String, name: String },

    #[error("source path does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot reference {path}: missing, or a directory with no file role")]
    InvalidFile { path: PathBuf },

    #[error("'{path}' names a file reference where a group was expected")]
    GroupExpected { path: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
