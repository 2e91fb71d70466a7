//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend only this many levels below the root when listing entries.
    /// Directory sizes always count the whole subtree.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    /// Whether entries at `depth` have their children listed.
    pub fn lists_children_at(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}
