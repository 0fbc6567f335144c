//! # Configuration
//!
//! Effective settings combining the global config (~/.config/uniqstr/config)
//! with command-line overrides.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use anyhow::Result;

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig};
use crate::id::UniqueString;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u32>,
    pub separator: Option<String>,
    pub max_length: Option<usize>,
}

/// Merged configuration with command-line flags overriding the file
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration as loaded from disk
    pub global: GlobalConfig,

    /// Values given on the command line
    pub overrides: Overrides,
}

impl Config {
    /// Loads the global config and applies `overrides` on top of it
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = GlobalConfig::load()?;
        Ok(Self { global, overrides })
    }

    /// Returns the effective hash seed
    pub fn seed(&self) -> u32 {
        self.overrides.seed.unwrap_or(self.global.seed)
    }

    /// Returns the effective parameter separator
    pub fn separator(&self) -> &str {
        self.overrides
            .separator
            .as_deref()
            .unwrap_or(&self.global.separator)
    }

    /// Returns the effective input length limit
    pub fn max_length(&self) -> usize {
        self.overrides.max_length.unwrap_or(self.global.max_length)
    }

    /// Whether colored diagnostics are enabled
    pub const fn color(&self) -> bool {
        self.global.color
    }

    /// Whether any setting differs from the compatible defaults
    pub fn is_default(&self) -> bool {
        self.generator() == UniqueString::default()
    }

    /// Builds an identifier generator from the effective settings
    pub fn generator(&self) -> UniqueString {
        UniqueString::default()
            .with_seed(self.seed())
            .with_separator(self.separator())
            .with_max_length(self.max_length())
    }
}
