//! Dependency summary collection and display
//!
//! Counts the distinct packages a root depends on, split into internal and
//! external, plus how many are test-only.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::tree::Pkg;

/// Distinct-package counts for a tree, excluding its root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DependencySummary {
    pub internal: usize,
    pub external: usize,
    /// Counted independently of the internal/external split
    pub testing: usize,
}

impl DependencySummary {
    pub fn total(&self) -> usize {
        self.internal + self.external
    }
}

impl fmt::Display for DependencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dependencies ({} internal, {} external, {} testing).",
            self.total(),
            self.internal,
            self.external,
            self.testing
        )
    }
}

/// Summary collector that deduplicates packages by name.
///
/// The first pre-order occurrence of a name decides its classification.
/// Later occurrences are skipped together with their subtrees, even when
/// those subtrees hold packages not reachable from the first occurrence.
#[derive(Debug, Default)]
pub struct SummaryCollector<'a> {
    seen: HashSet<&'a str>,
    summary: DependencySummary,
}

impl<'a> SummaryCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pkg` and, if its name is new, everything below it.
    pub fn record(&mut self, pkg: &'a Pkg) {
        let mut stack = vec![pkg];
        while let Some(pkg) = stack.pop() {
            if !self.seen.insert(pkg.name.as_str()) {
                continue;
            }
            if pkg.internal {
                self.summary.internal += 1;
            } else {
                self.summary.external += 1;
            }
            if pkg.test {
                self.summary.testing += 1;
            }
            stack.extend(pkg.deps.iter().rev());
        }
    }

    pub fn finalize(self) -> DependencySummary {
        self.summary
    }
}

/// Summarize the transitive dependencies of `root`. The root itself is not
/// counted, though a dependency sharing its name is.
pub fn summarize(root: &Pkg) -> DependencySummary {
    let mut collector = SummaryCollector::new();
    for dep in &root.deps {
        collector.record(dep);
    }
    collector.finalize()
}

/// Write the one-line summary for `root`, newline-terminated.
pub fn write_summary(root: &Pkg, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", summarize(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Pkg {
        Pkg::new("app").with_deps([
            Pkg::new("libA").with_deps([Pkg::new("shared")]),
            Pkg::new("libB").with_deps([Pkg::new("shared")]),
        ])
    }

    #[test]
    fn test_diamond_counts_shared_once() {
        let summary = summarize(&diamond());
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.external, 3);
        assert_eq!(summary.internal, 0);
        assert_eq!(summary.testing, 0);
    }

    #[test]
    fn test_single_node_is_all_zero() {
        assert_eq!(summarize(&Pkg::new("app")), DependencySummary::default());
    }

    #[test]
    fn test_summary_line_format() {
        let tree = Pkg::new("app").with_deps([
            Pkg::new("fmt").internal(),
            Pkg::new("os").internal().test(),
            Pkg::new("github.com/x/y").test(),
        ]);
        let mut out = Vec::new();
        write_summary(&tree, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3 dependencies (2 internal, 1 external, 2 testing).\n"
        );
    }

    #[test]
    fn test_first_occurrence_classifies() {
        // "log" is first seen as internal; the later external copy is ignored.
        let tree = Pkg::new("app").with_deps([
            Pkg::new("log").internal(),
            Pkg::new("lib").with_deps([Pkg::new("log").test()]),
        ]);
        let summary = summarize(&tree);
        assert_eq!(summary.internal, 1);
        assert_eq!(summary.external, 1);
        assert_eq!(summary.testing, 0);
    }

    #[test]
    fn test_duplicate_subtree_is_not_descended() {
        // The second "shared" carries an extra child; it must not be counted.
        let tree = Pkg::new("app").with_deps([
            Pkg::new("libA").with_deps([Pkg::new("shared")]),
            Pkg::new("libB").with_deps([Pkg::new("shared").with_deps([Pkg::new("hidden")])]),
        ]);
        assert_eq!(summarize(&tree).total(), 3);
    }

    #[test]
    fn test_counts_idempotent_under_duplication() {
        let deduped = Pkg::new("app").with_deps([
            Pkg::new("libA").with_deps([Pkg::new("shared").internal()]),
            Pkg::new("libB"),
        ]);
        let duplicated = Pkg::new("app").with_deps([
            Pkg::new("libA").with_deps([Pkg::new("shared").internal()]),
            Pkg::new("libB").with_deps([Pkg::new("shared").internal()]),
            Pkg::new("libA"),
        ]);
        assert_eq!(summarize(&deduped), summarize(&duplicated));
    }

    #[test]
    fn test_root_name_is_excluded_but_dependency_named_like_root_counts() {
        let tree = Pkg::new("app").with_deps([Pkg::new("app")]);
        assert_eq!(summarize(&tree).total(), 1);
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_value(summarize(&diamond())).unwrap();
        assert_eq!(json["external"], 3);
        assert_eq!(json["internal"], 0);
        assert_eq!(json["testing"], 0);
    }
}
