//! Tree formatter for dependency trees
//!
//! This module provides `TreeFormatter`, which renders a `Pkg` tree as one
//! line per node with branch connectors, and the `tree_lines` iterator it is
//! built on.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::stats::summarize;
use crate::tree::Pkg;

use super::config::OutputConfig;

/// Pad drawn under an ancestor whose subtree is closed on the right.
const CLOSED_PADDING: &str = "  ";
/// Pad drawn under an ancestor that still has siblings below it.
const OPEN_PADDING: &str = "│ ";
const BRANCH: &str = "├ ";
const BRANCH_LAST: &str = "└ ";

/// One rendered line: the connector prefix and the package it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub prefix: String,
    pub pkg: &'a Pkg,
    pub depth: usize,
    pub is_last: bool,
}

/// Pre-order iterator over the lines of a rendered tree.
///
/// Walks with an explicit stack so tree depth is not bounded by the call
/// stack. `closed[k]` records whether the ancestor at depth `k` was the last
/// of its siblings; depth 0 (the root level) is always closed.
pub struct TreeLines<'a> {
    stack: Vec<(&'a Pkg, usize, bool)>,
    closed: Vec<bool>,
}

/// Lines of `root` in pre-order: root first, then each child's subtree in
/// input order.
pub fn tree_lines(root: &Pkg) -> TreeLines<'_> {
    TreeLines {
        stack: vec![(root, 0, true)],
        closed: Vec::new(),
    }
}

impl<'a> Iterator for TreeLines<'a> {
    type Item = TreeLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (pkg, depth, is_last) = self.stack.pop()?;

        // Everything deeper than this node's parent has been fully emitted.
        self.closed.truncate(depth);

        let mut prefix = String::new();
        if depth > 0 {
            for &closed in &self.closed {
                prefix.push_str(if closed { CLOSED_PADDING } else { OPEN_PADDING });
            }
            prefix.push_str(if is_last { BRANCH_LAST } else { BRANCH });
        }
        self.closed.push(is_last);

        let last = pkg.deps.len().saturating_sub(1);
        self.stack.extend(
            pkg.deps
                .iter()
                .enumerate()
                .rev()
                .map(|(i, dep)| (dep, depth + 1, i == last)),
        );

        Some(TreeLine {
            prefix,
            pkg,
            depth,
            is_last,
        })
    }
}

/// Formatter for the tree view.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render to a plain string, without color.
    pub fn format(&self, root: &Pkg) -> String {
        let mut out = NoColor::new(Vec::new());
        self.write(root, &mut out).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Print to stdout, colored when the config allows it. Terminal
    /// detection is the caller's job; `use_color` is taken as final.
    pub fn print(&self, root: &Pkg) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(root, &mut stdout)?;
        stdout.flush()
    }

    /// Write the tree (and the summary line, if enabled) to `out`.
    pub fn write<W: WriteColor>(&self, root: &Pkg, out: &mut W) -> io::Result<()> {
        for line in tree_lines(root) {
            write!(out, "{}", line.prefix)?;
            if let Some(spec) = label_color(&line) {
                out.set_color(&spec)?;
                write!(out, "{}", line.pkg)?;
                out.reset()?;
            } else {
                write!(out, "{}", line.pkg)?;
            }
            writeln!(out)?;
        }

        if self.config.show_summary {
            writeln!(out, "{}", summarize(root))?;
        }
        Ok(())
    }
}

/// Color for a package label, by category. Unresolved wins over test, which
/// wins over internal.
fn label_color(line: &TreeLine<'_>) -> Option<ColorSpec> {
    let pkg = line.pkg;
    let mut spec = ColorSpec::new();
    if line.depth == 0 {
        spec.set_bold(true);
    }
    if !pkg.resolved {
        spec.set_fg(Some(Color::Red));
    } else if pkg.test {
        spec.set_fg(Some(Color::Yellow));
    } else if pkg.internal {
        spec.set_dimmed(true);
    } else if line.depth != 0 {
        return None;
    }
    Some(spec)
}
