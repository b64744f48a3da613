//! Property-based tests for the similarity kernel using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test kernel_properties
//! ```

use phash_correlation::core::hamming::{popcount_hardware, popcount_swar, PopcountBackend};
use phash_correlation::{cross_correlation, hamming_distance_xor, hamming_popcount};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Coefficient strips of realistic lengths
fn strip() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..96)
}

fn is_constant(strip: &[u8]) -> bool {
    strip.windows(2).all(|w| w[0] == w[1])
}

// ============================================================================
// Cross-correlation
// ============================================================================

proptest! {
    /// A strip matches itself fully unless it has no variance.
    #[test]
    fn self_correlation_is_one(a in prop::collection::vec(any::<u8>(), 1..96)) {
        let score = cross_correlation(&a, &a);
        if is_constant(&a) {
            prop_assert_eq!(score, 0.0);
        } else {
            prop_assert!((score - 1.0).abs() <= 1e-6, "score {} for {:?}", score, a);
        }
    }

    /// A constant strip on either side scores 0.
    #[test]
    fn constant_side_scores_zero(value in any::<u8>(), len in 1usize..64, b in strip()) {
        let a = vec![value; len];
        prop_assert_eq!(cross_correlation(&a, &b), 0.0);
        prop_assert_eq!(cross_correlation(&b, &a), 0.0);
    }

    /// Only the common prefix is compared.
    #[test]
    fn longer_input_is_truncated(a in strip(), b in strip()) {
        let n = a.len().min(b.len());
        prop_assert_eq!(cross_correlation(&a, &b), cross_correlation(&a[..n], &b[..n]));
    }

    /// Scores are finite and within the unit interval up to rounding.
    #[test]
    fn score_is_in_range(a in strip(), b in strip()) {
        let score = cross_correlation(&a, &b);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=1.0 + 1e-5).contains(&score), "score {}", score);
    }

    /// Adding a constant to every coefficient does not change the score.
    #[test]
    fn bias_shift_is_ignored(a in prop::collection::vec(0u8..=200, 1..64), shift in 0u8..=55) {
        let shifted: Vec<u8> = a.iter().map(|&v| v + shift).collect();
        let base = cross_correlation(&a, &a);
        let moved = cross_correlation(&a, &shifted);
        prop_assert!((base - moved).abs() <= 1e-4, "{} vs {}", base, moved);
    }
}

// ============================================================================
// Hamming distance
// ============================================================================

proptest! {
    #[test]
    fn distance_to_self_is_zero(v in any::<u64>()) {
        prop_assert_eq!(hamming_distance_xor(v, v), 0);
    }

    #[test]
    fn popcount_is_bounded(v in any::<u64>()) {
        prop_assert!(hamming_popcount(v) <= 64);
    }

    #[test]
    fn popcount_is_distance_to_zero(v in any::<u64>()) {
        prop_assert_eq!(hamming_popcount(v), hamming_distance_xor(v, 0));
    }

    /// Signed words give the same answers as their unsigned bit pattern.
    #[test]
    fn signed_and_unsigned_agree(x in any::<i64>(), y in any::<i64>()) {
        prop_assert_eq!(hamming_popcount(x as u64), x.count_ones());
        prop_assert_eq!(hamming_distance_xor(x as u64, y as u64), (x ^ y).count_ones());
    }

    #[test]
    fn swar_matches_hardware(v in any::<u64>()) {
        prop_assert_eq!(popcount_swar(v), popcount_hardware(v));
    }
}

#[test]
fn swar_matches_hardware_on_seeded_sample() {
    let mut rng = Pcg64::seed_from_u64(0x5EED_CAFE);
    for _ in 0..1000 {
        let v: u64 = rng.gen();
        assert_eq!(popcount_swar(v), popcount_hardware(v), "word {:#018x}", v);
    }
}

#[test]
fn swar_matches_hardware_on_words_with_at_most_two_bits() {
    assert_eq!(popcount_swar(0), popcount_hardware(0));
    for i in 0..64 {
        let single = 1u64 << i;
        assert_eq!(popcount_swar(single), popcount_hardware(single));
        for j in (i + 1)..64 {
            let pair = single | (1u64 << j);
            assert_eq!(popcount_swar(pair), popcount_hardware(pair));
        }
    }
}

#[test]
fn active_backend_agrees_with_both_paths() {
    let backend = PopcountBackend::active();
    let mut rng = Pcg64::seed_from_u64(42);
    for _ in 0..256 {
        let v: u64 = rng.gen();
        assert_eq!(backend.popcount(v), popcount_swar(v));
        assert_eq!(hamming_popcount(v), popcount_hardware(v));
    }
}
