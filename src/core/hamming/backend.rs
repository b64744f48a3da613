//! Population-count backends.
//!
//! Two ways of counting set bits in a 64-bit word:
//! - **Hardware** - `u64::count_ones`, which lowers to a single `popcnt`
//!   (x86), `cnt` (aarch64) or `i64.popcnt` (wasm) instruction when the
//!   target exposes one
//! - **SWAR** - a branch-free bit-parallel reduction that works everywhere
//!
//! The active backend is fixed at compile time from the target features,
//! so `hamming_popcount` has no per-call dispatch.

use serde::{Deserialize, Serialize};

const M1: u64 = 0x5555_5555_5555_5555;
const M2: u64 = 0x3333_3333_3333_3333;
const M4: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const H01: u64 = 0x0101_0101_0101_0101;

/// Whether the compilation target has a native population-count instruction.
const HAS_HARDWARE_POPCOUNT: bool = cfg!(any(
    all(target_arch = "x86_64", target_feature = "popcnt"),
    all(target_arch = "x86", target_feature = "popcnt"),
    target_arch = "aarch64",
    target_arch = "wasm32",
    all(target_arch = "riscv64", target_feature = "zbb"),
));

const ACTIVE_BACKEND: PopcountBackend = if HAS_HARDWARE_POPCOUNT {
    PopcountBackend::Hardware
} else {
    PopcountBackend::Swar
};

/// Available population-count implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopcountBackend {
    /// Native instruction via `count_ones`
    Hardware,
    /// Bit-parallel fallback
    Swar,
}

impl PopcountBackend {
    /// The backend `hamming_popcount` uses on this build
    pub const fn active() -> Self {
        ACTIVE_BACKEND
    }

    /// Count the set bits of `v` with this backend
    #[inline]
    pub fn popcount(self, v: u64) -> u32 {
        match self {
            PopcountBackend::Hardware => popcount_hardware(v),
            PopcountBackend::Swar => popcount_swar(v),
        }
    }

    /// Get a human-readable description of the backend
    pub fn description(&self) -> &'static str {
        match self {
            PopcountBackend::Hardware => "Hardware population count (native instruction)",
            PopcountBackend::Swar => "SWAR bit-parallel reduction (portable fallback)",
        }
    }
}

impl std::fmt::Display for PopcountBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopcountBackend::Hardware => write!(f, "hardware"),
            PopcountBackend::Swar => write!(f, "swar"),
        }
    }
}

/// Count set bits using the target's native instruction where available.
#[inline]
pub fn popcount_hardware(v: u64) -> u32 {
    v.count_ones()
}

/// Count set bits with the SWAR reduction.
///
/// Pairs, then nibbles, then bytes are summed in place; the final multiply
/// folds all byte counts into the top byte.
#[inline]
pub const fn popcount_swar(v: u64) -> u32 {
    let v = v.wrapping_sub((v >> 1) & M1);
    let v = (v & M2) + ((v >> 2) & M2);
    (((v + (v >> 4)) & M4).wrapping_mul(H01) >> 56) as u32
}
