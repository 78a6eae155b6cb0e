//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/causeway to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_causeway_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "causeway", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build causeway");

    assert!(status.success(), "Failed to build causeway binary");

    workspace.join("target/debug/causeway")
}

/// Run the causeway binary with the given arguments
pub fn run_causeway(args: &[&str]) -> Output {
    let binary = get_causeway_binary();

    Command::new(&binary)
        .args(args)
        .output()
        .expect("Failed to execute causeway binary")
}

/// Run the causeway binary, feeding `input` to its stdin
pub fn run_causeway_with_stdin(args: &[&str], input: &str) -> Output {
    let binary = get_causeway_binary();

    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn causeway binary");

    child
        .stdin
        .as_mut()
        .expect("stdin was piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to causeway stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for causeway binary")
}

/// Write a map file into `dir` and return its path
pub fn write_map(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write map file");
    path
}
