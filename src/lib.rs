//! # pHash Correlation
//!
//! A perceptual-hash similarity kernel.
//!
//! ## Primitives
//! - **Cross-correlation** of quantized DCT coefficient strips, taken as the
//!   best score over every cyclic offset and invariant to brightness bias
//! - **Hamming distance** over 64-bit hash words, using the hardware
//!   population count when the target has one
//!
//! Hamming distance is a cheap first cut over compact hashes;
//! cross-correlation is the finer score.
//! [`PairComparator`](crate::core::PairComparator) chains the two.
//!
//! ## Architecture
//! - `core` - The kernel and the comparator built on it
//! - `error` - Error types for input parsing and configuration
//!
//! All kernel functions are pure: no shared state, no I/O, safe to call
//! from any number of threads.

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::{cross_correlation, hamming_distance_xor, hamming_popcount};
pub use error::{Result, SimilarityError};

/// Initialize tracing for the application.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (for example
/// `"info"` or `"phash_correlation=debug"`) is used. Called by the binary;
/// library users install their own subscriber.
pub fn init_tracing(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
