//! Test harness for deptree integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub use deptree::test_utils::{TestInputs, diamond_tree};

pub fn run_deptree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    run_deptree_with_stdin(dir, args, None)
}

pub fn run_deptree_with_stdin(
    dir: &Path,
    args: &[&str],
    stdin: Option<&str>,
) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_deptree");
    let mut child = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run deptree");

    {
        let mut pipe = child.stdin.take().expect("Failed to open stdin");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for deptree");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_writes_inputs() {
        let inputs = TestInputs::new();
        let path = inputs.add_tree("tree.json", &diamond_tree());
        assert!(path.exists());
    }

    #[test]
    fn test_harness_runs_binary() {
        let inputs = TestInputs::new();
        let (_stdout, _stderr, success) = run_deptree(inputs.path(), &["--version"]);
        assert!(success);
    }
}
