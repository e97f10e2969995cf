//! Common test utilities for pomdeps integration tests
//!
//! Wraps a temporary project tree and the compiled `pomdeps` binary.

// Not every helper is used by every test file
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use pomdeps_cli::test_utils::PomBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a multi-module project tree.
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("project");
        fs::create_dir_all(&root)?;
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `pom` into `relative_dir` (empty for the root).
    pub fn add_pom(&self, relative_dir: &str, pom: &PomBuilder) -> Result<PathBuf> {
        pom.write_to(&self.root.join(relative_dir))
    }

    /// Write arbitrary descriptor content into `relative_dir/pom.xml`.
    pub fn add_raw_pom(&self, relative_dir: &str, content: &str) -> Result<PathBuf> {
        self.add_pom_bytes(relative_dir, content.as_bytes())
    }

    /// Write raw bytes into `relative_dir/pom.xml`.
    pub fn add_pom_bytes(&self, relative_dir: &str, content: &[u8]) -> Result<PathBuf> {
        let dir = self.root.join(relative_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join("pom.xml");
        fs::write(&path, content)?;
        Ok(path)
    }

    /// A `pomdeps <root>` command with logging left at its default.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pomdeps").unwrap();
        cmd.arg(&self.root).env_remove("RUST_LOG");
        cmd
    }

    /// Run `pomdeps <root>` and parse stdout as JSON, whatever the exit status.
    pub fn run_json(&self) -> Result<serde_json::Value> {
        let output = self.command().output()?;
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

/// Find the dependency list reported for `identifier`.
pub fn dependencies_of<'a>(report: &'a serde_json::Value, identifier: &str) -> Option<&'a Vec<serde_json::Value>> {
    report.as_array()?.iter().find_map(|entry| entry.get(identifier)?.as_array())
}
