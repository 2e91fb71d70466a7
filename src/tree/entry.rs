//! Entries discovered while enumerating a directory

use std::fs::FileType;
use std::path::{Path, PathBuf};

use super::utils::get_name;

/// The kind of a filesystem entry. Symlinks are resolved to their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Sockets, fifos and devices. Only ever seen at the root, where they
    /// become 0-byte leaves; the enumerator drops them.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One entry to be printed: where it lives, how deep it sits below the root,
/// and whether it closes its sibling group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    location: PathBuf,
    depth: usize,
    kind: EntryKind,
    is_last_sibling: bool,
}

impl PathNode {
    pub fn root(location: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self::new(location, 0, kind)
    }

    pub fn new(location: impl Into<PathBuf>, depth: usize, kind: EntryKind) -> Self {
        Self {
            location: location.into(),
            depth,
            kind,
            is_last_sibling: false,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_nested(&self) -> bool {
        self.depth > 0
    }

    pub fn is_last_sibling(&self) -> bool {
        self.is_last_sibling
    }

    /// Display name: the final path segment.
    pub fn name(&self) -> String {
        get_name(&self.location)
    }

    /// Set once by the enumerator after the sibling order is final.
    pub(crate) fn make_last_sibling(&mut self) {
        self.is_last_sibling = true;
    }
}
