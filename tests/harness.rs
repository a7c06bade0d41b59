//! Test harness for grove integration tests

use std::path::Path;
use std::process::Command;

pub use grove::test_utils::TestDir;

/// Run the grove binary in `dir` with color disabled.
pub fn run_grove(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_grove");
    let output = Command::new(binary)
        .args(["--color", "never"])
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run grove");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
        assert!(!dir.name().starts_with('.'));
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.py", "print()");
        assert!(file_path.exists());
    }
}
