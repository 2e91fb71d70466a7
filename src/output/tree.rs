//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which formats a complete `TreeNode`
//! tree structure into a string or prints it with colors.

use std::fmt;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::branches::OpenBranches;
use super::config::OutputConfig;

const BYTES: &str = "bytes";

/// One rendered entry: `<prefix><name> <size> bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    pub prefix: String,
    pub name: &'a str,
    pub size_bytes: u64,
    pub is_dir: bool,
}

impl fmt::Display for RenderedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {} {}", self.prefix, self.name, self.size_bytes, BYTES)
    }
}

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Every line of the tree in pre-order. Branch state is local to this
    /// call, so one formatter can render any number of trees.
    pub fn lines<'a>(&self, node: &'a TreeNode) -> Vec<RenderedLine<'a>> {
        let mut lines = Vec::new();
        let mut branches = OpenBranches::new();
        collect_lines(node, 0, &mut branches, &mut lines);
        lines
    }

    /// Plain text, one line per entry, each ending in `\n`.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        for line in self.lines(node) {
            output.push_str(&line.to_string());
            output.push('\n');
        }
        output
    }

    /// Print to stdout. `use_color` is the final word here: terminal and
    /// environment detection belong to the caller.
    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(node, &mut stdout)
    }

    /// Write the tree to any color-capable sink.
    pub fn write_colored<W: WriteColor>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        for line in self.lines(node) {
            write!(out, "{}", line.prefix)?;
            if line.is_dir {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(out, "{}", line.name)?;
            out.reset()?;
            write!(out, " ")?;
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(out, "{} {}", line.size_bytes, BYTES)?;
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn collect_lines<'a>(
    node: &'a TreeNode,
    depth: usize,
    branches: &mut OpenBranches,
    lines: &mut Vec<RenderedLine<'a>>,
) {
    lines.push(RenderedLine {
        prefix: branches.prefix(depth, node.is_last()),
        name: node.name(),
        size_bytes: node.size_bytes(),
        is_dir: node.is_dir(),
    });
    for child in node.children() {
        collect_lines(child, depth + 1, branches, lines);
    }
}
