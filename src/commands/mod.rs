//! # Commands
//!
//! CLI command implementations for uniqstr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod check;
pub mod completions;
pub mod encode;
pub mod generate;
pub mod hash;
pub mod setup;

pub use self::{
    check::execute as check,
    completions::execute as completions,
    encode::execute as encode,
    generate::{execute as generate, GenArgs},
    hash::{execute as hash, HashArgs, HashFormat},
    setup::execute as setup,
};
