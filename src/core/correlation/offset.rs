//! Normalized squared correlation at a single cyclic offset.

/// Running sums for one offset
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    num: f32,
    den_x: f32,
    den_y: f32,
}

impl Accumulator {
    /// Fold one straight (non-wrapping) segment into the sums
    #[inline]
    fn feed(&mut self, x: &[f32], y: &[f32]) {
        for (&dx, &dy) in x.iter().zip(y) {
            self.num += dx * dy;
            self.den_x += dx * dx;
            self.den_y += dy * dy;
        }
    }

    /// Anti-correlated and zero-variance alignments score 0.
    #[inline]
    fn finish(self) -> f32 {
        if self.num < 0.0 || self.den_x == 0.0 || self.den_y == 0.0 {
            0.0
        } else {
            (self.num * self.num) / (self.den_x * self.den_y)
        }
    }
}

/// Compute the normalized squared correlation of `x` against `y` shifted
/// cyclically by `offset`.
///
/// ```text
/// num  = Σ x[i] · y[(i + d) mod n]
/// denx = Σ x[i]²
/// deny = Σ y[(i + d) mod n]²
/// ```
///
/// Returns `num² / (denx · deny)`, or 0 when `num` is negative or either
/// denominator is zero. Inputs are expected to be mean-subtracted and of
/// equal length; a longer input is truncated to the shorter one and
/// `offset` is taken modulo the length.
///
/// The wrap-around is walked as two straight segments (`[0, n - d)` against
/// `y[d..]`, then `[n - d, n)` against `y[..d]`), so no index is reduced
/// per element.
pub fn offset_correlation(x: &[f32], y: &[f32], offset: usize) -> f32 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let offset = offset % n;
    let split = n - offset;

    let mut acc = Accumulator::default();
    acc.feed(&x[..split], &y[offset..]);
    acc.feed(&x[split..], &y[..offset]);
    acc.finish()
}
