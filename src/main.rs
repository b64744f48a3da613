//! # phash-xcorr CLI
//!
//! Command-line front end for the perceptual-hash similarity kernel.
//!
//! ## Usage
//! ```bash
//! phash-xcorr correlate "1,2,3,4,5,6,7,8" "2,3,4,5,6,7,8,9"
//! phash-xcorr hamming 0xAAAA 0xAAAB --output json
//! ```

mod cli;

use phash_correlation::Result;

fn main() -> Result<()> {
    cli::run()
}
