//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/uniqstr/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SEED, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME, MAX_INPUT_LENGTH, PARAM_SEPARATOR,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["seed", "separator", "max_length", "color"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/uniqstr/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Hash seed for generated identifiers
    #[serde(default)]
    pub seed: u32,

    /// String placed between values before hashing
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Maximum joined input length in UTF-16 code units
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Whether to color diagnostic output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            separator: default_separator(),
            max_length: MAX_INPUT_LENGTH,
            color: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    PARAM_SEPARATOR.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_length() -> usize {
    MAX_INPUT_LENGTH
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/uniqstr/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/uniqstr)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `uniqstr setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    fn save_with_comments(path: &PathBuf, config: &Self) -> Result<()> {
        let separator = toml::Value::String(config.separator.clone()).to_string();
        let content = format!(
            r#"# uniqstr Global Configuration
# Settings applied to every `uniqstr gen` invocation.
# Location: ~/.config/uniqstr/config
#
# Changing seed, separator or max_length changes (or rejects) identifiers
# that the defaults would produce. Keep the defaults for compatible output.

# Hash seed (0-4294967295).
# Default: 0
seed = {seed}

# String placed between values before hashing.
# Default: "-"
separator = {separator}

# Maximum length of the joined input, in UTF-16 code units.
# Default: 131072
max_length = {max_length}

# Whether to color warnings and errors.
# Default: true
color = {color}
"#,
            seed = config.seed,
            separator = separator,
            max_length = config.max_length,
            color = config.color,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// This parses the raw TOML to detect unknown fields and missing fields.
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Global config not found");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in VALID_FIELDS {
            if !table.contains_key(field) {
                validation.missing.push(field.to_string());
            }
        }

        Ok(validation)
    }

    /// Validates and rewrites the global config file if needed.
    ///
    /// Missing fields are filled with defaults and unknown fields are dropped.
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let validation = Self::validate()?;

        if !validation.has_changes() {
            return Ok(validation);
        }

        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        // serde fills defaults for missing fields and ignores unknown ones
        let config = Self::load()?;
        Self::save_with_comments(&path, &config)?;

        Ok(validation)
    }
}
