//! Rational entities-per-pixel arithmetic.
//!
//! A pixel type declares how many backing-store words one logical pixel
//! consumes as a fraction, so that sub-word packing (e.g. 1/32 of a u64 word
//! per 2-bit pixel) and multi-word pixels (e.g. 9 f64 per 3×3 matrix) go
//! through the same sizing formula.

/// Non-negative rational number `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    num: u64,
    den: u64,
}

impl Fraction {
    /// Construct `num / den`. Panics if `den == 0`.
    pub fn new(num: u64, den: u64) -> Self {
        assert!(den > 0, "fraction denominator must be positive");
        Self { num, den }
    }

    /// One word per pixel.
    pub fn one() -> Self {
        Self { num: 1, den: 1 }
    }

    #[inline]
    pub fn numerator(&self) -> u64 {
        self.num
    }

    #[inline]
    pub fn denominator(&self) -> u64 {
        self.den
    }

    /// `ceil(self * n)`, the number of words needed to hold `n` pixels.
    ///
    /// Returns `None` on overflow so container creation can refuse oversized
    /// geometries before allocating.
    pub fn mul_ceil(&self, n: u64) -> Option<u64> {
        let prod = n.checked_mul(self.num)?;
        Some(prod / self.den + u64::from(prod % self.den != 0))
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
