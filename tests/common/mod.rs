//! # Test Harness
//!
//! Provides utilities for integration testing uniqstr without affecting user configuration.
//! Uses thread-local storage instead of environment variables for in-process tests,
//! and a `HOME` override for spawned binaries.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use uniqstr::set_home_override;

/// Test environment with a temporary home directory for the global config.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/uniqstr/config)
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment and redirects this thread's config lookups to it.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("uniqstr")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Creates a `uniqstr` command that uses this environment's home directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("uniqstr").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
#[derive(Default)]
pub struct GlobalConfigBuilder {
    seed: Option<u32>,
    separator: Option<String>,
    max_length: Option<usize>,
    color: Option<bool>,
    extra: Vec<String>,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Adds a raw line, e.g. an unknown field.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.extra.push(line.into());
        self
    }

    pub fn build(self) -> String {
        let mut lines = Vec::new();
        if let Some(v) = self.seed {
            lines.push(format!("seed = {v}"));
        }
        if let Some(v) = self.separator {
            lines.push(format!("separator = \"{v}\""));
        }
        if let Some(v) = self.max_length {
            lines.push(format!("max_length = {v}"));
        }
        if let Some(v) = self.color {
            lines.push(format!("color = {v}"));
        }
        lines.extend(self.extra);
        lines.join("\n")
    }
}
