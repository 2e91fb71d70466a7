//! TreeWalker - enumerates and sizes a subtree into a `TreeNode`

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entry::{EntryKind, PathNode};
use super::enumerator::list_children;
use super::node::TreeNode;
use super::utils::get_file_size;

/// The result of walking one root.
#[derive(Debug)]
pub struct Walk {
    pub root: TreeNode,
    /// Recoverable failures. Each one contributed zero bytes to its ancestors.
    pub skipped: Vec<TreeError>,
}

/// Mutable state threaded through one walk.
#[derive(Debug, Default)]
struct WalkState {
    skipped: Vec<TreeError>,
    /// Canonical paths of the directories on the current descent.
    ancestors: Vec<PathBuf>,
}

impl WalkState {
    fn skip(&mut self, err: TreeError) {
        warn!("{}", err);
        self.skipped.push(err);
    }
}

/// Tree walker that builds the full sized tree in memory.
///
/// Directory sizes must be known before their own line is printed, so the
/// whole subtree is read first. Each directory is listed exactly once.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, following symlinks. A link back into a directory that is
    /// already being walked is recorded as a `SymlinkLoop` and sized 0.
    pub fn walk(&self, root: &Path) -> Result<Walk, TreeError> {
        let meta = fs::metadata(root).map_err(|e| TreeError::root(root, e))?;
        let node = PathNode::root(root, EntryKind::from(meta.file_type()));

        let mut state = WalkState::default();
        let root = match node.kind() {
            EntryKind::File => TreeNode::file(node.name(), root, meta.len()),
            _ => self.walk_node(&node, &mut state),
        };
        debug!(
            "walked {}: {} bytes, {} skipped",
            node.location().display(),
            root.size_bytes(),
            state.skipped.len()
        );

        Ok(Walk {
            root,
            skipped: state.skipped,
        })
    }

    fn walk_node(&self, node: &PathNode, state: &mut WalkState) -> TreeNode {
        let name = node.name();
        let path = node.location();

        let mut tree_node = match node.kind() {
            EntryKind::File => {
                let size = get_file_size(path).unwrap_or_else(|err| {
                    state.skip(err);
                    0
                });
                TreeNode::file(name, path, size)
            }
            EntryKind::Other => TreeNode::other(name, path),
            EntryKind::Dir => {
                // A directory that cannot be resolved is still listed; the
                // listing itself reports why it failed.
                let canonical = fs::canonicalize(path).ok();
                if canonical
                    .as_ref()
                    .is_some_and(|c| state.ancestors.contains(c))
                {
                    state.skip(TreeError::SymlinkLoop(path.to_path_buf()));
                    TreeNode::dir(name, path, Vec::new())
                } else {
                    let pushed = match canonical {
                        Some(c) => {
                            state.ancestors.push(c);
                            true
                        }
                        None => false,
                    };
                    let dir = self.walk_dir(node, name, state);
                    if pushed {
                        state.ancestors.pop();
                    }
                    dir
                }
            }
        };

        tree_node.set_last(node.is_last_sibling());
        tree_node
    }

    fn walk_dir(&self, node: &PathNode, name: String, state: &mut WalkState) -> TreeNode {
        let path = node.location();
        let listing = list_children(path, node.depth() + 1);
        state.skipped.extend(listing.errors);

        let children: Vec<TreeNode> = listing
            .entries
            .iter()
            .map(|child| self.walk_node(child, state))
            .collect();

        if self.config.lists_children_at(node.depth()) {
            TreeNode::dir(name, path, children)
        } else {
            let size_bytes = children.iter().map(TreeNode::size_bytes).sum();
            TreeNode::Dir {
                name,
                path: path.to_path_buf(),
                size_bytes,
                children: Vec::new(),
                is_last: false,
            }
        }
    }
}
