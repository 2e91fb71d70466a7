//! Directory enumeration: list, order, and mark the last sibling.
//!
//! Children are ordered directories first, then by case-insensitive name.
//! Names that compare equal ignoring case fall back to their raw order so the
//! result is total and stable across runs.
//!
//! Symlinks are resolved to their target's kind. Dangling links and entries
//! that are neither files nor directories are left out of the listing.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::TreeError;

use super::entry::{EntryKind, PathNode};

/// The outcome of reading one directory.
#[derive(Debug, Default)]
pub struct Listing {
    /// Children in display order, the final one marked as last sibling.
    pub entries: Vec<PathNode>,
    /// Failures hit while reading. A directory that cannot be opened at all
    /// yields no entries and a single `ReadDir` error.
    pub errors: Vec<TreeError>,
}

/// Read the immediate children of `dir`, each placed at `depth`.
pub fn list_children(dir: &Path, depth: usize) -> Listing {
    let mut listing = Listing::default();

    let read_dir = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) => {
            let err = TreeError::read_dir(dir, e);
            warn!("{}", err);
            listing.errors.push(err);
            return listing;
        }
    };

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let err = TreeError::read_dir(dir, e);
                warn!("{}", err);
                listing.errors.push(err);
                continue;
            }
        };
        let path = entry.path();
        let kind = match entry.file_type() {
            Ok(file_type) if file_type.is_symlink() => match fs::metadata(&path) {
                Ok(meta) => EntryKind::from(meta.file_type()),
                Err(e) => {
                    debug!("skipping dangling link {}: {}", path.display(), e);
                    continue;
                }
            },
            Ok(file_type) => EntryKind::from(file_type),
            Err(e) => {
                let err = TreeError::metadata(&path, e);
                warn!("{}", err);
                listing.errors.push(err);
                continue;
            }
        };
        if kind == EntryKind::Other {
            debug!("skipping special file {}", path.display());
            continue;
        }
        listing.entries.push(PathNode::new(path, depth, kind));
    }

    sort_entries(&mut listing.entries);
    mark_last(&mut listing.entries);
    listing
}

/// Order entries directories first, then by case-insensitive name.
pub fn sort_entries(entries: &mut [PathNode]) {
    entries.sort_by_cached_key(sort_key);
}

fn sort_key(node: &PathNode) -> (bool, String, OsString) {
    let raw = node
        .location()
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    (!node.is_dir(), node.name().to_lowercase(), raw)
}

/// Mark the final entry as the last sibling. No-op on an empty group.
pub fn mark_last(entries: &mut [PathNode]) {
    if let Some(last) = entries.last_mut() {
        last.make_last_sibling();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn names(listing: &Listing) -> Vec<String> {
        listing.entries.iter().map(PathNode::name).collect()
    }

    #[test]
    fn test_directories_before_files() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "a");
        dir.add_dir("z_dir");
        dir.add_file("b.txt", "b");
        dir.add_dir("m_dir");

        let listing = list_children(dir.path(), 1);
        assert!(listing.errors.is_empty());
        assert_eq!(names(&listing), ["m_dir", "z_dir", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_case_insensitive_order() {
        let dir = TestDir::new();
        dir.add_file("banana", "");
        dir.add_file("Apple", "");
        dir.add_file("cherry", "");
        dir.add_dir("Zeta");
        dir.add_dir("alpha");

        let listing = list_children(dir.path(), 1);
        assert_eq!(
            names(&listing),
            ["alpha", "Zeta", "Apple", "banana", "cherry"]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_case_only_difference_is_stable() {
        let dir = TestDir::new();
        dir.add_file("readme", "");
        dir.add_file("README", "");
        dir.add_file("ReadMe", "");

        let first = names(&list_children(dir.path(), 1));
        let second = names(&list_children(dir.path(), 1));
        // Raw byte order breaks the tie: uppercase sorts before lowercase.
        assert_eq!(first, ["README", "ReadMe", "readme"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exactly_one_last_sibling() {
        let dir = TestDir::new();
        dir.add_file("one", "");
        dir.add_file("two", "");
        dir.add_dir("three");

        let listing = list_children(dir.path(), 1);
        let last: Vec<_> = listing
            .entries
            .iter()
            .filter(|e| e.is_last_sibling())
            .map(PathNode::name)
            .collect();
        assert_eq!(last, ["two"]);
        assert!(listing.entries.last().unwrap().is_last_sibling());
    }

    #[test]
    fn test_depth_assigned_to_children() {
        let dir = TestDir::new();
        dir.add_file("x", "");
        dir.add_dir("y");

        let listing = list_children(dir.path(), 4);
        assert!(listing.entries.iter().all(|e| e.depth() == 4));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TestDir::new();
        let listing = list_children(dir.path(), 1);
        assert!(listing.entries.is_empty());
        assert!(listing.errors.is_empty());
    }

    #[test]
    fn test_unlistable_directory_degrades_to_empty() {
        let dir = TestDir::new();
        let missing = dir.path().join("missing");

        let listing = list_children(&missing, 1);
        assert!(listing.entries.is_empty());
        assert_eq!(listing.errors.len(), 1);
        assert!(matches!(listing.errors[0], TreeError::ReadDir { .. }));
        assert_eq!(listing.errors[0].path(), missing.as_path());
    }

    #[test]
    fn test_listing_a_file_degrades_to_empty() {
        let dir = TestDir::new();
        let file = dir.add_file("plain.txt", "data");

        let listing = list_children(&file, 1);
        assert!(listing.entries.is_empty());
        assert_eq!(listing.errors.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_takes_target_kind() {
        let dir = TestDir::new();
        dir.add_dir("real");
        dir.add_file("target.txt", "abc");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link"))
            .expect("Failed to create symlink");
        std::os::unix::fs::symlink(dir.path().join("target.txt"), dir.path().join("alias.txt"))
            .expect("Failed to create symlink");

        let listing = list_children(dir.path(), 1);
        assert!(listing.errors.is_empty());
        assert_eq!(names(&listing), ["link", "real", "alias.txt", "target.txt"]);
        assert_eq!(listing.entries[0].kind(), EntryKind::Dir);
        assert_eq!(listing.entries[2].kind(), EntryKind::File);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_dropped_before_marking_last() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "a");
        std::os::unix::fs::symlink("nowhere", dir.path().join("zz_broken"))
            .expect("Failed to create symlink");

        let listing = list_children(dir.path(), 1);
        assert!(listing.errors.is_empty());
        assert_eq!(names(&listing), ["a.txt"]);
        assert!(listing.entries[0].is_last_sibling());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_fifo_dropped() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "a");
        let status = std::process::Command::new("mkfifo")
            .arg(dir.path().join("pipe"))
            .status();
        if !status.is_ok_and(|s| s.success()) {
            return;
        }

        let listing = list_children(dir.path(), 1);
        assert_eq!(names(&listing), ["a.txt"]);
        assert!(listing.entries[0].is_last_sibling());
    }

    #[test]
    fn test_sort_and_mark_hand_built() {
        let mut entries = vec![
            PathNode::new("p/b", 1, EntryKind::File),
            PathNode::new("p/A", 1, EntryKind::File),
            PathNode::new("p/c", 1, EntryKind::Dir),
        ];
        sort_entries(&mut entries);
        mark_last(&mut entries);

        let order: Vec<_> = entries.iter().map(PathNode::name).collect();
        assert_eq!(order, ["c", "A", "b"]);
        assert!(!entries[0].is_last_sibling());
        assert!(!entries[1].is_last_sibling());
        assert!(entries[2].is_last_sibling());
    }

    #[test]
    fn test_mark_last_on_empty_group() {
        let mut entries: Vec<PathNode> = Vec::new();
        mark_last(&mut entries);
        assert!(entries.is_empty());
    }
}
