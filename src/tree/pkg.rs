//! Package node type shared by every renderer

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

fn default_resolved() -> bool {
    true
}

/// A resolved package and its direct dependencies.
///
/// The tree is handed over fully built. The same package name may appear
/// under several parents (diamond dependencies); nodes are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pkg {
    pub name: String,
    /// Part of the toolchain's standard/internal set.
    #[serde(default)]
    pub internal: bool,
    /// The resolver could locate the package's source.
    #[serde(default = "default_resolved")]
    pub resolved: bool,
    /// The edge to this package exists only for test builds.
    #[serde(default)]
    pub test: bool,
    /// Direct dependencies, in resolution order.
    #[serde(default)]
    pub deps: Vec<Pkg>,
}

impl Pkg {
    /// A resolved, external, non-test package with no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: false,
            resolved: true,
            test: false,
            deps: Vec::new(),
        }
    }

    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    pub fn test(mut self) -> Self {
        self.test = true;
        self
    }

    pub fn unresolved(mut self) -> Self {
        self.resolved = false;
        self
    }

    pub fn with_deps(mut self, deps: impl IntoIterator<Item = Pkg>) -> Self {
        self.deps.extend(deps);
        self
    }

    /// Number of nodes in the tree rooted here, counting shared packages
    /// once per occurrence.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(pkg) = stack.pop() {
            count += 1;
            stack.extend(pkg.deps.iter());
        }
        count
    }
}

/// Children are dropped from a heap stack rather than recursively, so a
/// deep chain cannot overflow the call stack when it goes out of scope.
impl Drop for Pkg {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.deps);
        while let Some(mut pkg) = stack.pop() {
            stack.append(&mut pkg.deps);
        }
    }
}

/// Human-readable label: the name, flagged when unresolved.
impl fmt::Display for Pkg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.resolved {
            f.write_str(" (unresolved)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_marks_unresolved() {
        assert_eq!(Pkg::new("fmt").to_string(), "fmt");
        assert_eq!(
            Pkg::new("github.com/a/b").unresolved().to_string(),
            "github.com/a/b (unresolved)"
        );
    }

    #[test]
    fn test_node_count_counts_shared_packages_per_occurrence() {
        let tree = Pkg::new("app").with_deps([
            Pkg::new("libA").with_deps([Pkg::new("shared")]),
            Pkg::new("libB").with_deps([Pkg::new("shared")]),
        ]);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_deep_chain_drops_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut tree = Pkg::new("leaf");
                for i in 0..100_000 {
                    tree = Pkg::new(format!("pkg{}", i)).with_deps([tree]);
                }
                let count = tree.node_count();
                drop(tree);
                count
            })
            .unwrap();
        assert_eq!(handle.join().unwrap(), 100_001);
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let pkg: Pkg = serde_json::from_str(r#"{"name": "strings"}"#).unwrap();
        assert_eq!(pkg, Pkg::new("strings"));
    }

    #[test]
    fn test_serialize_keeps_empty_deps() {
        let json = serde_json::to_value(Pkg::new("os").internal()).unwrap();
        assert_eq!(json["name"], "os");
        assert_eq!(json["internal"], true);
        assert_eq!(json["resolved"], true);
        assert_eq!(json["test"], false);
        assert!(json["deps"].as_array().is_some_and(|deps| deps.is_empty()));
    }
}
