//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `branches` - Branch prefixes and the per-render open-branch set
//! - `config` - Output configuration types
//! - `tree` - Text formatter, plain or colored
//! - `json` - JSON output

mod branches;
mod config;
mod json;
mod tree;

// Re-export public types and functions
pub use branches::{IN_LIST, INDENTATION, LAST_IN_LIST, OpenBranches, raw_prefix};
pub use config::OutputConfig;
pub use json::print_json;
pub use tree::{RenderedLine, TreeFormatter};

use crate::tree::Walk;

/// Summary printed after the tree: counts of displayed entries below the
/// root, the root's total size, and how many entries were skipped.
pub fn report_line(walk: &Walk) -> String {
    let (dir_count, file_count) = walk.root.counts();
    let mut line = format!(
        "{} directories, {} files, {} bytes",
        dir_count,
        file_count,
        walk.root.size_bytes()
    );
    if !walk.skipped.is_empty() {
        line.push_str(&format!(", {} skipped", walk.skipped.len()));
    }
    line
}
