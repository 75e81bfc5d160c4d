//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temporary directory holding the config file the CLI is
//! pointed at, so tests never read the developer's own configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const ISOLATED_ENV: &[&str] = &["NOWPLAYING_TOKEN", "NOWPLAYING_CONFIG", "RUST_LOG", "COLUMNS"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use nowplaying_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("verbose = true\n");
///
/// let result = world.run(&["127.0.0.1:32400"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").expect("Failed to write config file");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Replace the config file contents.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config file");
        self
    }

    /// Point `cmd` at this world's config and strip inherited settings.
    ///
    /// Output is forced to plain text so assertions can match exact lines.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--color")
            .arg("never");

        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }

        cmd
    }

    /// Run the `nowplaying` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("nowplaying")
            .map_err(|e| anyhow::anyhow!("Failed to find nowplaying binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
