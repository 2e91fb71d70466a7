//! In-memory sized tree, serializable for JSON output

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A sized entry and, for directories, its children in display order.
///
/// `is_last` records whether the entry closes its sibling group. It drives the
/// branch glyphs and is left out of JSON, where array position says the same.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        size_bytes: u64,
        #[serde(skip)]
        is_last: bool,
    },
    Dir {
        name: String,
        path: PathBuf,
        size_bytes: u64,
        children: Vec<TreeNode>,
        #[serde(skip)]
        is_last: bool,
    },
    /// A special file named as the root (fifo, socket, device). Always 0 bytes.
    Other {
        name: String,
        path: PathBuf,
        #[serde(skip)]
        is_last: bool,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        TreeNode::File {
            name: name.into(),
            path: path.into(),
            size_bytes,
            is_last: false,
        }
    }

    /// Build a directory from children already in display order. Its size is
    /// the sum of theirs and the final child is marked last.
    pub fn dir(name: impl Into<String>, path: impl Into<PathBuf>, mut children: Vec<TreeNode>) -> Self {
        let size_bytes = children.iter().map(TreeNode::size_bytes).sum();
        for child in children.iter_mut() {
            child.set_last(false);
        }
        if let Some(last) = children.last_mut() {
            last.set_last(true);
        }
        TreeNode::Dir {
            name: name.into(),
            path: path.into(),
            size_bytes,
            children,
            is_last: false,
        }
    }

    pub fn other(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        TreeNode::Other {
            name: name.into(),
            path: path.into(),
            is_last: false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Dir { name, .. } | TreeNode::Other { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } | TreeNode::Dir { path, .. } | TreeNode::Other { path, .. } => path,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        match self {
            TreeNode::File { size_bytes, .. } | TreeNode::Dir { size_bytes, .. } => *size_bytes,
            TreeNode::Other { .. } => 0,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn is_last(&self) -> bool {
        match self {
            TreeNode::File { is_last, .. } | TreeNode::Dir { is_last, .. } | TreeNode::Other { is_last, .. } => {
                *is_last
            }
        }
    }

    pub(crate) fn set_last(&mut self, value: bool) {
        match self {
            TreeNode::File { is_last, .. } | TreeNode::Dir { is_last, .. } | TreeNode::Other { is_last, .. } => {
                *is_last = value
            }
        }
    }

    /// Count displayed directories and non-directory entries below this node.
    pub fn counts(&self) -> (usize, usize) {
        let mut dirs = 0;
        let mut files = 0;
        for child in self.children() {
            let (d, f) = child.counts();
            dirs += d;
            files += f;
            if child.is_dir() {
                dirs += 1;
            } else {
                files += 1;
            }
        }
        (dirs, files)
    }
}
