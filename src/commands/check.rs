//! # Check Command
//!
//! Verifies that a string has the shape of a generated identifier.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::id::base32::{is_encoded, ALPHABET, ENCODED_WIDTH};

/// Executes the check command. Fails if `id` is not well formed.
pub fn execute(id: &str) -> Result<()> {
    if !is_encoded(id) {
        anyhow::bail!(
            "Not a valid identifier: {id:?} (expected {ENCODED_WIDTH} characters from \"{}\")",
            String::from_utf8_lossy(ALPHABET)
        );
    }

    println!("{id}");
    Ok(())
}
