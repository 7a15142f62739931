//! Temporary script directories and a preconfigured binary command

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A scripts directory plus an isolated config home. The TempDirs must be
/// kept alive for the duration of the test.
pub struct ScriptsDir {
    pub temp_dir: TempDir,
    pub config_home: TempDir,
    pub path: PathBuf,
}

impl ScriptsDir {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn index_path(&self) -> PathBuf {
        self.path.join("index.html")
    }

    pub fn read_index(&self) -> anyhow::Result<String> {
        Ok(fs::read_to_string(self.index_path())?)
    }

    /// The binary with `--dir` pointing here and no user config in reach
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = self.bare_command()?;
        cmd.arg("--dir").arg(&self.path);
        Ok(cmd)
    }

    /// The binary with an isolated config home but no `--dir`
    pub fn bare_command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("script-index")?;
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

/// Creates an empty scripts directory
pub fn empty_scripts_dir() -> anyhow::Result<ScriptsDir> {
    let temp_dir = TempDir::new()?;
    let config_home = TempDir::new()?;
    let path = temp_dir.path().join("scripts");
    fs::create_dir(&path)?;
    Ok(ScriptsDir {
        temp_dir,
        config_home,
        path,
    })
}

/// Creates a scripts directory holding the given (empty) files
pub fn scripts_dir_with(names: &[&str]) -> anyhow::Result<ScriptsDir> {
    let dir = empty_scripts_dir()?;
    for name in names {
        fs::write(dir.path.join(name), "# script\n")?;
    }
    Ok(dir)
}

/// Scenario: one file of every recognized kind plus noise
pub fn mixed_scripts_dir() -> anyhow::Result<ScriptsDir> {
    scripts_dir_with(&[
        "backup.sh",
        "cleanup.bash",
        "report.py",
        "gui.pyw",
        "setup.ps1",
        "README.md",
        "notes.txt",
    ])
}
