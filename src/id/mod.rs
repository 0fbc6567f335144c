//! # Unique String Generation
//!
//! Derives stable 13-character identifiers from one or more text values.
//! Values are joined with `-`, hashed with [`hash::hash64_str`] and encoded
//! with [`base32::encode`] (e.g., `["foo"]` -> `wfdb6h7odcoiq`).
//!
//! ## Validation
//! - At least one value is required
//! - Every value must be text (a JSON string)
//! - The joined input may not exceed 131072 UTF-16 code units
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;
pub mod hash;

use serde_json::Value;
use thiserror::Error;

use crate::constants::{DEFAULT_SEED, MAX_INPUT_LENGTH, PARAM_SEPARATOR};

/// Errors raised while validating input for identifier generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("at least one parameter is required")]
    NoParameters,

    #[error("parameter {index} must be a string, got {value}")]
    InvalidParameterType { index: usize, value: Value },

    #[error("joined input is {length} characters long, the limit is {limit}")]
    InputTooLong { limit: usize, length: usize },
}

/// Generates the identifier for the given parameters using default settings.
///
/// # Arguments
/// * `params` - Values to combine, in order
///
/// # Returns
/// A 13-character identifier, or the first validation failure
pub fn unique_string(params: &[Value]) -> Result<String, IdError> {
    UniqueString::default().generate(params)
}

/// Generates the identifier for values that are already text.
pub fn unique_string_from_strs<S: AsRef<str>>(parts: &[S]) -> Result<String, IdError> {
    UniqueString::default().generate_strs(parts)
}

/// Identifier generator settings.
///
/// The default reproduces [`unique_string`] exactly. Changing any field
/// produces identifiers that differ from the default ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueString {
    seed: u32,
    separator: String,
    max_length: usize,
}

impl Default for UniqueString {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            separator: PARAM_SEPARATOR.to_string(),
            max_length: MAX_INPUT_LENGTH,
        }
    }
}

impl UniqueString {
    /// Sets the hash seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the string placed between parameters.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the maximum joined length in UTF-16 code units.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub const fn seed(&self) -> u32 {
        self.seed
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validates `params` as text and generates their identifier.
    pub fn generate(&self, params: &[Value]) -> Result<String, IdError> {
        if params.is_empty() {
            return Err(IdError::NoParameters);
        }

        let parts = params
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::String(s) => Ok(s.as_str()),
                other => Err(IdError::InvalidParameterType {
                    index,
                    value: other.clone(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.generate_strs(&parts)
    }

    /// Joins `parts` and generates their identifier.
    pub fn generate_strs<S: AsRef<str>>(&self, parts: &[S]) -> Result<String, IdError> {
        if parts.is_empty() {
            return Err(IdError::NoParameters);
        }

        let joined = self.join(parts);
        let length = joined.encode_utf16().count();
        if length > self.max_length {
            return Err(IdError::InputTooLong {
                limit: self.max_length,
                length,
            });
        }

        Ok(base32::encode(hash::hash64_str(&joined, self.seed)))
    }

    /// Joins `parts` with the separator, in order and without trimming.
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let mut joined = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                joined.push_str(&self.separator);
            }
            joined.push_str(part.as_ref());
        }
        joined
    }
}
