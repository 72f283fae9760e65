//! Test utilities for building dependency trees and input files.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::output::write_json;
use crate::tree::Pkg;

/// A temporary directory holding serialized dependency trees.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestInputs {
    dir: TempDir,
}

impl TestInputs {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Serialize `tree` to `name` and return its full path.
    pub fn add_tree(&self, name: &str, tree: &Pkg) -> PathBuf {
        let mut json = Vec::new();
        write_json(tree, &mut json).expect("Failed to serialize tree");
        self.add_raw(name, &String::from_utf8_lossy(&json))
    }

    /// Write `content` verbatim, creating parent directories as needed.
    pub fn add_raw(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestInputs {
    fn default() -> Self {
        Self::new()
    }
}

/// `app` importing `libA` and `libB`, which both import `shared`.
pub fn diamond_tree() -> Pkg {
    Pkg::new("app").with_deps([
        Pkg::new("libA").with_deps([Pkg::new("shared")]),
        Pkg::new("libB").with_deps([Pkg::new("shared")]),
    ])
}

/// A root with `width` leaf dependencies, every third one internal.
pub fn wide_tree(width: usize) -> Pkg {
    Pkg::new("root").with_deps((0..width).map(|i| {
        let pkg = Pkg::new(format!("pkg{}", i));
        if i % 3 == 0 { pkg.internal() } else { pkg }
    }))
}

/// A single chain of `depth` packages below the root.
pub fn deep_tree(depth: usize) -> Pkg {
    let mut tree = Pkg::new("leaf");
    for i in (0..depth.saturating_sub(1)).rev() {
        tree = Pkg::new(format!("pkg{}", i)).with_deps([tree]);
    }
    Pkg::new("root").with_deps([tree])
}

/// A tree with `fanout` children per node, `levels` deep, where every
/// subtree shares the same package names so the summary dedups heavily.
pub fn shared_tree(fanout: usize, levels: usize) -> Pkg {
    fn build(level: usize, fanout: usize, levels: usize) -> Pkg {
        let pkg = Pkg::new(format!("level{}", level));
        if level == levels {
            return pkg;
        }
        pkg.with_deps((0..fanout).map(|i| {
            let mut child = build(level + 1, fanout, levels);
            child.name = format!("{}/{}", child.name, i);
            child
        }))
    }
    build(0, fanout, levels)
}
