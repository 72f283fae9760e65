//! Loading resolver output into a `Pkg` tree
//!
//! The resolver hands trees over in the same JSON shape that `--json`
//! prints, so a dump can be fed straight back in.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{LoadError, Result};

use super::pkg::Pkg;

/// Input name that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Load a tree from `path`, or from stdin when `path` is `-`.
pub fn load_tree(path: &Path) -> Result<Pkg> {
    if path == Path::new(STDIN_PATH) {
        return read_tree_from(io::stdin().lock(), path);
    }

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_tree_from(BufReader::new(file), path)
}

/// Read a tree from any reader. Errors are attributed to `<input>`.
pub fn read_tree(reader: impl Read) -> Result<Pkg> {
    read_tree_from(reader, Path::new("<input>"))
}

fn read_tree_from(reader: impl Read, path: &Path) -> Result<Pkg> {
    let to_load_error = |source: serde_json::Error| {
        if source.is_io() {
            LoadError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            LoadError::Json {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    // Nesting depth is bounded by the heap: serde_json's recursion limit is
    // lifted and the derived visitor grows its stack on demand.
    let mut json = serde_json::Deserializer::from_reader(reader);
    json.disable_recursion_limit();
    let pkg = Pkg::deserialize(serde_stacker::Deserializer::new(&mut json))
        .map_err(to_load_error)?;
    json.end().map_err(to_load_error)?;
    debug!(
        input = %path.display(),
        root = %pkg.name,
        nodes = pkg.node_count(),
        "loaded dependency tree"
    );
    Ok(pkg)
}
