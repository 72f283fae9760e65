//! Tree formatting and display
//!
//! This module provides the renderers for a dependency tree:
//! - Console tree view with branch connectors and optional colors
//! - JSON structural dump
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `tree` - Tree view formatter and the line iterator behind it
//! - `json` - JSON output

mod config;
mod json;
mod tree;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, write_json, write_json_value};
pub use tree::{TreeFormatter, TreeLine, TreeLines, tree_lines};
