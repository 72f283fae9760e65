//! deptree - Render resolved dependency trees, summaries and import paths

pub mod error;
pub mod explain;
pub mod output;
pub mod stats;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod tree;

pub use error::LoadError;
pub use explain::{explain, explain_lines, write_explain};
pub use output::{OutputConfig, TreeFormatter, print_json, tree_lines, write_json};
pub use stats::{DependencySummary, SummaryCollector, summarize, write_summary};
pub use tree::{Pkg, load_tree, read_tree};
