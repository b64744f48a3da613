//! # Correlation Module
//!
//! Offset-tolerant similarity between two coefficient strips.
//!
//! ## How It Works
//! 1. Truncate both strips to their common length `n`
//! 2. Subtract each strip's mean (brightness/bias invariance)
//! 3. Score every cyclic offset `d ∈ [0, n)` with the normalized squared
//!    correlation
//! 4. Return the square root of the best offset's score
//!
//! Scores lie in `[0, 1]` up to single-precision rounding; a strip compared
//! with itself scores 1 unless it is constant, in which case it scores 0.
//! Rounding can push a self-comparison marginally above 1, so treat the
//! score as a similarity rather than asserting `<= 1`.
//!
//! ## Example
//! ```rust
//! use phash_correlation::core::correlation::cross_correlation;
//!
//! let a = [1, 2, 3, 4, 5, 6, 7, 8];
//! let b = [2, 3, 4, 5, 6, 7, 8, 9];
//! assert!((cross_correlation(&a, &b) - 1.0).abs() < 1e-6);
//! ```

mod offset;

pub use offset::offset_correlation;

use serde::{Deserialize, Serialize};

/// Best cyclic alignment between two strips
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    /// Correlation score at the best offset
    pub score: f32,
    /// Cyclic offset into the second strip that produced `score`
    ///
    /// The first offset wins ties; 0 when no offset correlates.
    pub offset: usize,
}

/// Cross-correlation evaluator with reusable scratch buffers.
///
/// The free functions allocate a fresh correlator per call. Holding one
/// across calls keeps the two mean-subtracted buffers alive, growing them to
/// the longest strip seen. Results are identical either way.
#[derive(Debug, Default, Clone)]
pub struct CrossCorrelator {
    x: Vec<f32>,
    y: Vec<f32>,
}

impl CrossCorrelator {
    /// Create a correlator with empty scratch
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a correlator with scratch preallocated for strips of `len`
    pub fn with_capacity(len: usize) -> Self {
        Self {
            x: Vec::with_capacity(len),
            y: Vec::with_capacity(len),
        }
    }

    /// Score two strips under their best cyclic alignment.
    pub fn correlate(&mut self, a: &[u8], b: &[u8]) -> f32 {
        self.correlate_aligned(a, b).score
    }

    /// Score two strips and report the offset that achieved the score.
    pub fn correlate_aligned(&mut self, a: &[u8], b: &[u8]) -> Alignment {
        let n = a.len().min(b.len());
        if n == 0 {
            return Alignment::default();
        }

        let (a, b) = (&a[..n], &b[..n]);
        center_into(&mut self.x, a);
        center_into(&mut self.y, b);

        let mut best = 0.0f32;
        let mut best_offset = 0;
        for d in 0..n {
            let v = offset_correlation(&self.x, &self.y, d);
            if v > best {
                best = v;
                best_offset = d;
            }
        }

        Alignment {
            score: best.sqrt(),
            offset: best_offset,
        }
    }
}

/// Score two coefficient strips under their best cyclic alignment.
///
/// Only the common prefix `min(a.len(), b.len())` is compared. Empty and
/// constant strips score 0.
pub fn cross_correlation(a: &[u8], b: &[u8]) -> f32 {
    cross_correlation_aligned(a, b).score
}

/// Like [`cross_correlation`], also returning the winning offset.
pub fn cross_correlation_aligned(a: &[u8], b: &[u8]) -> Alignment {
    CrossCorrelator::with_capacity(a.len().min(b.len())).correlate_aligned(a, b)
}

/// Single-precision mean of a non-empty strip, from an exact integer sum
fn mean(samples: &[u8]) -> f32 {
    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    sum as f32 / samples.len() as f32
}

/// Overwrite `out` with `samples` minus their mean
fn center_into(out: &mut Vec<f32>, samples: &[u8]) {
    let m = mean(samples);
    out.clear();
    out.extend(samples.iter().map(|&s| f32::from(s) - m));
}
