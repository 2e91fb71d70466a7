//! Directory tree walking logic
//!
//! Walking happens in two steps:
//!
//! - `list_children`: reads one directory, orders its entries (directories
//!   first, then case-insensitive name) and marks the last sibling
//! - `TreeWalker`: drives the enumeration depth-first and builds a sized
//!   `TreeNode`, recording every recoverable I/O failure along the way

mod config;
mod entry;
mod enumerator;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{EntryKind, PathNode};
pub use enumerator::{Listing, list_children, mark_last, sort_entries};
pub use node::TreeNode;
pub use utils::{get_file_size, get_name};
pub use walker::{TreeWalker, Walk};
