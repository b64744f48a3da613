//! # Hamming Module
//!
//! Hamming distance over 64-bit perceptual hash words.
//!
//! The distance between two hashes is the number of bit positions in which
//! they differ, i.e. the population count of their XOR. Hash words are opaque
//! bit patterns: callers holding signed words reinterpret them with
//! `word as u64`, which keeps the bit pattern intact.
//!
//! ## Example
//! ```rust
//! use phash_correlation::core::hamming::{hamming_distance_xor, hamming_popcount};
//!
//! assert_eq!(hamming_distance_xor(0b1010, 0b1011), 1);
//! assert_eq!(hamming_popcount(-1i64 as u64), 64);
//! ```

mod backend;

pub use backend::{popcount_hardware, popcount_swar, PopcountBackend};

/// Number of bits in a hash word
pub const HASH_WORD_BITS: u32 = u64::BITS;

/// Count the set bits of a hash word.
#[inline]
pub fn hamming_popcount(v: u64) -> u32 {
    PopcountBackend::active().popcount(v)
}

/// Count the bits that differ between two hash words.
///
/// Lower distance = more similar images.
#[inline]
pub fn hamming_distance_xor(x: u64, y: u64) -> u32 {
    hamming_popcount(x ^ y)
}
