//! Error types for tree walking

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read directory {}: {}", .path.display(), .source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read metadata of {}: {}", .path.display(), .source)]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("symlink loop at {}", .0.display())]
    SymlinkLoop(PathBuf),
}

impl TreeError {
    pub fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    /// A failed `stat` below the root. Always recoverable, even when the
    /// entry vanished between listing and sizing.
    pub fn metadata(path: &Path, source: io::Error) -> Self {
        Self::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    /// A failed `stat` of the walk root. A missing root becomes `NotFound`.
    pub fn root(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::metadata(path, source)
        }
    }

    /// The path this error occurred at.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p)
            | Self::SymlinkLoop(p)
            | Self::ReadDir { path: p, .. }
            | Self::Metadata { path: p, .. } => p,
        }
    }

    /// Whether the walk can continue after this error.
    ///
    /// Unreadable entries and symlink loops below the root degrade to zero
    /// bytes and the walk keeps going. A missing root ends it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ReadDir { .. } | Self::Metadata { .. } | Self::SymlinkLoop(_)
        )
    }
}
