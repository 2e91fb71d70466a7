//! Sizetree - a tree listing that shows every entry's size in bytes
//!
//! ```no_run
//! if let Some(text) = sizetree::tree("some/dir") {
//!     print!("{}", text);
//! }
//! ```

use std::path::Path;

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OpenBranches, OutputConfig, TreeFormatter, print_json, report_line};
pub use tree::{EntryKind, PathNode, TreeNode, TreeWalker, Walk, WalkerConfig, list_children};

/// Render the subtree at `path` as text, one `<name> <size> bytes` line per
/// entry.
///
/// Returns `None` when `path` does not exist. Unreadable entries below an
/// existing root count as zero bytes and never turn into an error here.
pub fn tree(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    if !path.exists() {
        return None;
    }
    let walk = TreeWalker::new(WalkerConfig::default()).walk(path).ok()?;
    let formatter = TreeFormatter::new(OutputConfig { use_color: false });
    Some(formatter.format(&walk.root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_tree_nonexistent_is_none() {
        let dir = TestDir::new();
        assert_eq!(tree(dir.path().join("does-not-exist")), None);
    }

    #[test]
    fn test_tree_single_file() {
        let dir = TestDir::new();
        let file = dir.add_file("notes.md", "0123456789abc");
        assert_eq!(tree(&file).as_deref(), Some("notes.md 13 bytes\n"));
    }

    #[test]
    fn test_tree_scenario() {
        let dir = TestDir::new();
        dir.add_file("root/a.txt", "12345");
        dir.add_file("root/b/c.txt", "0123456789");

        let expected = "\
root 15 bytes
├─ a.txt 5 bytes
└─ b 10 bytes
   └─ c.txt 10 bytes
";
        assert_eq!(tree(dir.path().join("root")).as_deref(), Some(expected));
    }

    #[test]
    fn test_tree_empty_directory() {
        let dir = TestDir::new();
        dir.add_dir("empty");
        assert_eq!(
            tree(dir.path().join("empty")).as_deref(),
            Some("empty 0 bytes\n")
        );
    }
}
