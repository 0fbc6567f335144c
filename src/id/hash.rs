//! # Content Hash
//!
//! Two-lane 32-bit mixing hash producing a 64-bit value. Input is consumed in
//! 8-byte blocks; each block feeds one little-endian word into each lane.
//!
//! Not a cryptographic hash. Output must stay bit-identical across releases,
//! since stored identifiers are derived from it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub use crate::constants::DEFAULT_SEED;

const C1: u32 = 597_399_067;
const C2: u32 = 2_869_860_233;
const LANE_A_ADD: u32 = 1_444_728_091;
const LANE_B_ADD: u32 = 197_830_471;
const FMIX_1: u32 = 2_246_822_507;
const FMIX_2: u32 = 3_266_489_909;

const BLOCK_SIZE: usize = 8;

/// Hashes a byte slice into a 64-bit value.
///
/// # Arguments
/// * `data` - Bytes to hash (may be empty)
/// * `seed` - Initial value of both lanes
///
/// # Returns
/// The 64-bit hash; `high` lane result in the upper 32 bits
pub fn hash64(data: &[u8], seed: u32) -> u64 {
    let mut lane_a = seed;
    let mut lane_b = seed;

    let blocks = data.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();

    for block in blocks {
        let k1 = mix_k1(read_le(&block[..4]));
        lane_a = (lane_a ^ k1)
            .rotate_left(19)
            .wrapping_add(lane_b)
            .wrapping_mul(5)
            .wrapping_add(LANE_A_ADD);

        let k2 = mix_k2(read_le(&block[4..]));
        lane_b = (lane_b ^ k2)
            .rotate_left(13)
            .wrapping_add(lane_a)
            .wrapping_mul(5)
            .wrapping_add(LANE_B_ADD);
    }

    // Tail is folded in with a bare XOR, unlike the block path.
    if !tail.is_empty() {
        let (low, high) = tail.split_at(tail.len().min(4));
        lane_a ^= mix_k1(read_le(low));
        if !high.is_empty() {
            lane_b ^= mix_k2(read_le(high));
        }
    }

    // Length is folded as a 32-bit value.
    #[allow(clippy::cast_possible_truncation)]
    let len = data.len() as u32;
    let a = lane_a ^ len;
    let b = lane_b ^ len;

    let s = a.wrapping_add(b);
    let t = b.wrapping_add(s);

    let fa = fmix(s);
    let fb = fmix(t);

    let low = fa.wrapping_add(fb);
    let high = fb.wrapping_add(low);

    (u64::from(high) << 32) | u64::from(low)
}

/// Hashes the UTF-8 bytes of a string.
pub fn hash64_str(text: &str, seed: u32) -> u64 {
    hash64(text.as_bytes(), seed)
}

/// Reads up to four bytes as a little-endian word, zero-extending short input.
fn read_le(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &b)| acc | (u32::from(b) << (8 * i)))
}

const fn mix_k1(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

const fn mix_k2(k: u32) -> u32 {
    k.wrapping_mul(C2).rotate_left(17).wrapping_mul(C1)
}

/// Final avalanche over a single 32-bit word.
const fn fmix(x: u32) -> u32 {
    let y = (x ^ (x >> 16)).wrapping_mul(FMIX_1);
    let z = (y ^ (y >> 13)).wrapping_mul(FMIX_2);
    z ^ (z >> 16)
}
