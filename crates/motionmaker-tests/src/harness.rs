//! Test harness for running the `motionmaker` binary as a subprocess.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Result of running the motionmaker CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command exited with `code`.
    pub fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.exit_code, code,
            "Unexpected exit code.\nstdout: {}\nstderr: {}",
            self.stdout, self.stderr
        );
    }

    /// Parses stdout as JSON (for `--json` runs).
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Runs CLI commands inside a scratch directory.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Run the motionmaker CLI with the given arguments.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--manifest-path"])
            .arg(workspace_manifest_path())
            .args(["-p", "motionmaker-cli", "--bin", "motionmaker", "--"])
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Create a starter scene in the work directory.
    pub fn init_scene(&self, name: &str, object: &str) -> PathBuf {
        let path = self.path().join(name);
        self.run_cli(&["init", "--out", path_str(&path), "--object", object])
            .assert_success();
        path
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a path for use as a CLI argument.
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}

fn workspace_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}
