//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::tree::Pkg;

/// Write any serializable value as two-space indented JSON plus a newline.
///
/// The stack grows on demand, so arbitrarily deep trees serialize.
pub fn write_json_value<T: Serialize + ?Sized>(
    value: &T,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut json = serde_json::Serializer::pretty(&mut *out);
    value
        .serialize(serde_stacker::Serializer::new(&mut json))
        .map_err(io::Error::other)?;
    writeln!(out)
}

/// Write the full tree, every field of every node, as pretty JSON.
pub fn write_json(root: &Pkg, out: &mut impl Write) -> io::Result<()> {
    write_json_value(root, out)
}

/// Print the tree as pretty-printed JSON to stdout.
pub fn print_json(root: &Pkg) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(root, &mut lock)?;
    lock.flush()
}
