//! # Base32 Encoding
//!
//! Fixed-width lowercase Base32 for 64-bit hash values.
//! Uses alphabet: a-z, 2-7 (32 characters, no 0, 1, 8, 9 or uppercase).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Lowercase Base32 alphabet (digits 0, 1 excluded so they can't be mistaken for o, l)
pub const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Number of characters in every encoded value.
pub const ENCODED_WIDTH: usize = 13;

/// Encodes a u64 value into a 13-character Base32 string, most significant bits first.
///
/// 13 symbols read 65 bits, so the last symbol holds the lowest 4 bits of
/// `value` followed by one zero bit.
///
/// # Arguments
/// * `value` - The number to encode
///
/// # Returns
/// A `String` of exactly `ENCODED_WIDTH` characters
pub fn encode(mut value: u64) -> String {
    let mut result = String::with_capacity(ENCODED_WIDTH);

    for _ in 0..ENCODED_WIDTH {
        let idx = (value >> 59) as usize;
        result.push(char::from(ALPHABET[idx]));
        value <<= 5;
    }

    result
}

/// Returns true if `s` has the shape of an encoded value.
pub fn is_encoded(s: &str) -> bool {
    s.len() == ENCODED_WIDTH && s.bytes().all(|b| ALPHABET.contains(&b))
}
