//! # Core Module
//!
//! The similarity kernel and the pieces built directly on it.
//!
//! ## Modules
//! - `correlation` - Offset-tolerant cross-correlation of coefficient strips
//! - `hamming` - Hamming distance and population count of 64-bit hash words
//! - `comparator` - Two-stage pair decision (Hamming cut, then correlation)
//! - `input` - Parsing of textual hash words and strips

pub mod comparator;
pub mod correlation;
pub mod hamming;
pub mod input;

// Re-export commonly used types
pub use comparator::{CompareConfig, HashedStrip, PairComparator, PairVerdict};
pub use correlation::{cross_correlation, cross_correlation_aligned, Alignment, CrossCorrelator};
pub use hamming::{hamming_distance_xor, hamming_popcount, PopcountBackend};
pub use input::{parse_hash_word, parse_strip};
