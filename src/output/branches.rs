//! Branch prefixes and the open-branch column set
//!
//! An entry at depth `d > 0` gets `d - 1` indentation units followed by a
//! connector. Every character column under a sibling group that is still
//! open (its last member not yet printed) carries a vertical bar instead of
//! a blank, so groups several levels up stay connected through their
//! descendants.

use std::collections::BTreeSet;

pub const IN_LIST: &str = "├─ ";
pub const LAST_IN_LIST: &str = "└─ ";
pub const INDENTATION: &str = "   ";

const OPENING_BRANCH: char = '├';
const CLOSING_BRANCH: char = '└';
const BRANCH: char = '│';
const BLANK: char = ' ';

/// Columns where a continuation bar must be drawn.
///
/// Lives for a single render: create one per call and thread it through the
/// walk in pre-order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpenBranches {
    columns: BTreeSet<usize>,
}

impl OpenBranches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the prefix for the next entry in pre-order and update the open
    /// set from it. The root (depth 0) has no prefix.
    pub fn prefix(&mut self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }
        let raw = raw_prefix(depth, is_last);
        self.refresh(&raw);
        self.connect(raw)
    }

    pub fn is_open(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Open a column at every `├`, retire it at every `└`.
    fn refresh(&mut self, raw: &[char]) {
        for (column, &c) in raw.iter().enumerate() {
            if c == OPENING_BRANCH {
                self.columns.insert(column);
            } else if c == CLOSING_BRANCH {
                self.columns.remove(&column);
            }
        }
    }

    /// Draw bars over blank columns that are open.
    fn connect(&self, mut raw: Vec<char>) -> String {
        for column in self.columns() {
            if raw.get(column) == Some(&BLANK) {
                raw[column] = BRANCH;
            }
        }
        raw.into_iter().collect()
    }
}

/// The unconnected prefix: indentation plus the connector, no bars.
pub fn raw_prefix(depth: usize, is_last: bool) -> Vec<char> {
    let connector = if is_last { LAST_IN_LIST } else { IN_LIST };
    INDENTATION
        .repeat(depth.saturating_sub(1))
        .chars()
        .chain(connector.chars())
        .collect()
}
