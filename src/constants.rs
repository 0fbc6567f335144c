//! # Constants
//!
//! Centralized constants for magic values used throughout uniqstr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Identifier Construction
// =============================================================================

/// Maximum length of the joined input, in UTF-16 code units.
pub const MAX_INPUT_LENGTH: usize = 131_072;

/// Separator placed between parameters before hashing.
pub const PARAM_SEPARATOR: &str = "-";

/// Seed used for identifier hashing unless configured otherwise.
pub const DEFAULT_SEED: u32 = 0;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside user's config directory).
pub const GLOBAL_CONFIG_DIR: &str = "uniqstr";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
