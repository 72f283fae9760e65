//! Explain mode: every import path from the root to a target package

use std::io::{self, Write};

use crate::tree::Pkg;

/// Separator between package names in a rendered path.
pub const PATH_SEPARATOR: &str = " -> ";

/// All root-to-node paths ending at a package named `target`, in pre-order
/// discovery order.
///
/// Shared packages are reported once per occurrence. The root itself counts
/// when it matches.
pub fn explain<'a>(root: &'a Pkg, target: &str) -> Vec<Vec<&'a str>> {
    let mut paths = Vec::new();
    let mut path: Vec<&str> = Vec::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((pkg, depth)) = stack.pop() {
        // Drop whatever the previously visited sibling subtree left behind.
        path.truncate(depth);
        path.push(&pkg.name);

        if pkg.name == target {
            paths.push(path.clone());
        }
        stack.extend(pkg.deps.iter().rev().map(|dep| (dep, depth + 1)));
    }

    paths
}

/// Explain paths joined with `" -> "`, one string per path.
pub fn explain_lines(root: &Pkg, target: &str) -> Vec<String> {
    explain(root, target)
        .into_iter()
        .map(|path| path.join(PATH_SEPARATOR))
        .collect()
}

/// Write one line per path and return how many were written.
pub fn write_explain(root: &Pkg, target: &str, out: &mut impl Write) -> io::Result<usize> {
    let lines = explain_lines(root, target);
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    Ok(lines.len())
}
