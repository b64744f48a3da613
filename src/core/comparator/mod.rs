//! # Comparator Module
//!
//! Decides whether two images are perceptually similar from their hashes.
//!
//! ## How It Works
//! 1. Compare the 64-bit hash words by Hamming distance (cheap first cut)
//! 2. Pairs further apart than the configured threshold are rejected
//!    without touching their strips
//! 3. Remaining candidates are scored by cross-correlating their
//!    coefficient strips (finer, offset-tolerant)
//! 4. A candidate is similar when its score reaches the minimum correlation
//!
//! Build one with [`CompareConfig`]; the comparator keeps its correlation
//! scratch between calls.

mod config;

pub use config::{CompareConfig, DEFAULT_HAMMING_THRESHOLD, DEFAULT_MIN_CORRELATION};

use crate::core::correlation::CrossCorrelator;
use crate::core::hamming::hamming_distance_xor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A compact hash word together with the coefficient strip it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedStrip {
    /// 64-bit perceptual hash
    pub hash: u64,
    /// Quantized DCT coefficient strip
    pub strip: Vec<u8>,
}

impl HashedStrip {
    /// Create a new hashed strip
    pub fn new(hash: u64, strip: Vec<u8>) -> Self {
        Self { hash, strip }
    }
}

/// Outcome of comparing two hashed strips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairVerdict {
    /// Hamming distance between the hash words
    pub distance: u32,
    /// Correlation score, or `None` when the Hamming cut rejected the pair
    pub correlation: Option<f32>,
    /// Offset of the best alignment, when correlation ran
    pub offset: Option<usize>,
    /// Final decision
    pub is_similar: bool,
}

/// Two-stage comparator: Hamming first cut, then cross-correlation.
#[derive(Debug, Clone)]
pub struct PairComparator {
    hamming_threshold: u32,
    min_correlation: f32,
    correlator: CrossCorrelator,
}

impl PairComparator {
    /// Values are checked by [`CompareConfig::build`].
    fn new(hamming_threshold: u32, min_correlation: f32) -> Self {
        Self {
            hamming_threshold,
            min_correlation,
            correlator: CrossCorrelator::new(),
        }
    }

    /// Maximum Hamming distance that still reaches the correlation stage
    pub fn hamming_threshold(&self) -> u32 {
        self.hamming_threshold
    }

    /// Get the minimum correlation score
    pub fn min_correlation(&self) -> f32 {
        self.min_correlation
    }

    /// Compare two hashed strips.
    pub fn compare(&mut self, a: &HashedStrip, b: &HashedStrip) -> PairVerdict {
        let distance = hamming_distance_xor(a.hash, b.hash);

        if distance > self.hamming_threshold {
            debug!(
                distance,
                threshold = self.hamming_threshold,
                "pair rejected by hamming cut"
            );
            return PairVerdict {
                distance,
                correlation: None,
                offset: None,
                is_similar: false,
            };
        }

        let alignment = self.correlator.correlate_aligned(&a.strip, &b.strip);
        let is_similar = alignment.score >= self.min_correlation;
        debug!(
            distance,
            score = alignment.score,
            offset = alignment.offset,
            is_similar,
            "pair scored by correlation"
        );

        PairVerdict {
            distance,
            correlation: Some(alignment.score),
            offset: Some(alignment.offset),
            is_similar,
        }
    }
}

impl Default for PairComparator {
    fn default() -> Self {
        Self::new(DEFAULT_HAMMING_THRESHOLD, DEFAULT_MIN_CORRELATION)
    }
}
