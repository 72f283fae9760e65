//! Dependency tree model and loading
//!
//! - `pkg` - the `Pkg` node type handed over by the resolver
//! - `load` - reading a serialized tree from a file, stdin or any reader

mod load;
mod pkg;

pub use load::{STDIN_PATH, load_tree, read_tree};
pub use pkg::Pkg;
