//! # uniqstr
//!
//! Deterministic, compact identifiers derived from text content.
//!
//! One or more values are joined with `-`, hashed with a two-lane 32-bit
//! mixing hash into 64 bits, and rendered as 13 lowercase Base32 characters.
//! The same input always yields the same identifier.
//!
//! ## Features
//!
//! - **Stable**: Output is bit-for-bit reproducible across platforms
//! - **Compact**: Always 13 characters from `a-z2-7`
//! - **Validated**: Rejects empty, non-text or oversized input with distinct errors
//! - **Not cryptographic**: Fast, but trivially reversible by brute force
//!
//! ```
//! assert_eq!(uniqstr::unique_string_from_strs(&["foo"]).unwrap(), "wfdb6h7odcoiq");
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod id;
pub mod ui;

pub use config::{set_home_override, Config};
pub use id::{
    base32::encode, hash::hash64, hash::hash64_str, unique_string, unique_string_from_strs,
    IdError, UniqueString,
};
