//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use contactgrid_types::RawContact;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment: a temp data directory, optional contact file and
/// config, and env vars applied to every CLI run.
///
/// # Example
/// ```no_run
/// use contactgrid_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_contacts(&fixtures::single_record());
/// let result = world.run(&["normalize"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    contacts_file: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".contactgrid");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            contacts_file: None,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn contacts_file(&self) -> Option<&Path> {
        self.contacts_file.as_deref()
    }

    /// Write `contacts.json` and pass it via `--data` on every run.
    pub fn with_contacts(self, contacts: &[RawContact]) -> Self {
        self.with_contacts_json(&fixtures::to_json(contacts))
    }

    pub fn with_contacts_json(mut self, json: &str) -> Self {
        let path = self.temp_dir.path().join("contacts.json");
        std::fs::write(&path, json).expect("Failed to write contacts file");
        self.contacts_file = Some(path);
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if let Some(path) = &self.contacts_file {
            cmd.arg("--data").arg(path);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("CONTACTGRID_PATH");
        cmd.env_remove("CONTACTGRID_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("contactgrid")
            .map_err(|e| anyhow::anyhow!("Failed to find contactgrid binary: {}", e))?;

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

/// Captured result of a CLI run.
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

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
