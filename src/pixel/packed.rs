//! Sub-word unsigned integer pixels packed into u64 words.
//!
//! Design
//! - `BITS`-wide values are packed `64 / BITS` to a word. For logical pixel
//!   index `idx`, the word index is `idx / pixels_per_word` and the bit
//!   offset within the word is `(idx % pixels_per_word) * BITS`.
//! - `set_value(v)` stores `v mod 2^BITS`: out-of-range values truncate to
//!   the low `BITS` bits, deterministically and silently. No representable
//!   state exists outside `[0, 2^BITS - 1]`.
//! - Arbitrary-precision conversion uses the same rule with floored-mod
//!   semantics, so a negative input stores the same value as any positive
//!   input congruent mod `2^BITS`.
//!
//! Concurrency hazard: pixels sharing a physical word cannot be written from
//! two threads without tearing each other's bits. The store handle is
//! `!Send`/`!Sync`, which rules this out at compile time; keep it in mind if
//! the raw words are ever exported to a parallel collaborator.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::ShapeMismatch;
use crate::fraction::Fraction;
use crate::pixel::{NativePixel, PixelOps};
use crate::store::ArrayStore;

/// Unsigned `BITS`-bit integer pixel packed into u64 words.
#[derive(Clone, Debug)]
pub struct PackedUintPixel<const BITS: u32> {
    store: ArrayStore<u64>,
    idx: usize,
}

/// 2-bit unsigned pixel, 32 to a word.
pub type U2Pixel = PackedUintPixel<2>;
/// 4-bit unsigned pixel, 16 to a word.
pub type U4Pixel = PackedUintPixel<4>;

impl<const BITS: u32> PackedUintPixel<BITS> {
    /// Logical pixels per 64-bit word.
    pub const fn pixels_per_word() -> usize {
        (64 / BITS) as usize
    }

    const fn value_mask() -> u64 {
        if BITS >= 64 {
            u64::MAX
        } else {
            (1u64 << BITS) - 1
        }
    }

    /// Detached zero-valued instance, usable as a container prototype.
    pub fn prototype() -> Self {
        assert!(
            BITS >= 1 && BITS <= 64,
            "packed pixel width must be within 1..=64 bits"
        );
        Self {
            store: ArrayStore::new(1),
            idx: 0,
        }
    }

    /// Detached instance holding `v mod 2^BITS`.
    pub fn with_value(v: u64) -> Self {
        let mut p = Self::prototype();
        p.set_value(v);
        p
    }

    /// The stored value, always `< 2^BITS`.
    #[inline]
    pub fn get(&self) -> u64 {
        let ppw = Self::pixels_per_word();
        let word = self.store.get(self.idx / ppw);
        let shift = (self.idx % ppw) as u32 * BITS;
        (word >> shift) & Self::value_mask()
    }

    /// Store `v mod 2^BITS` (read-modify-write on the shared word).
    #[inline]
    pub fn set_value(&mut self, v: u64) {
        let ppw = Self::pixels_per_word();
        let shift = (self.idx % ppw) as u32 * BITS;
        let word_idx = self.idx / ppw;
        let cleared = self.store.get(word_idx) & !(Self::value_mask() << shift);
        self.store
            .set(word_idx, cleared | ((v & Self::value_mask()) << shift));
    }

    /// Lossless widening of the stored unsigned value.
    pub fn get_big_integer(&self) -> BigInt {
        BigInt::from(self.get())
    }

    /// Truncate `v` to its low `BITS` bits and store the result. Floored-mod
    /// semantics: `-122` stores the same 2-bit value as `2`.
    pub fn set_big_integer(&mut self, v: &BigInt) {
        let modulus = BigInt::from(1u8) << BITS;
        let reduced = ((v % &modulus) + &modulus) % &modulus;
        // reduced is in [0, 2^BITS), which fits u64 for BITS <= 64
        self.set_value(reduced.to_u64().unwrap_or(u64::MAX));
    }
}

impl<const BITS: u32> NativePixel for PackedUintPixel<BITS> {
    type Word = u64;

    fn create_variable(&self) -> Self {
        Self::prototype()
    }

    fn copy(&self) -> Self {
        Self::with_value(self.get())
    }

    fn duplicate_on(&self, store: &ArrayStore<u64>) -> Self {
        Self {
            store: store.clone(),
            idx: 0,
        }
    }

    fn entities_per_pixel(&self) -> Fraction {
        Fraction::new(1, Self::pixels_per_word() as u64)
    }

    #[inline]
    fn index(&self) -> usize {
        self.idx
    }

    #[inline]
    fn update_index(&mut self, i: usize) {
        self.idx = i;
    }

    fn update_store(&mut self, store: &ArrayStore<u64>) {
        self.store = store.clone();
    }
}

impl<const BITS: u32> PixelOps for PackedUintPixel<BITS> {
    fn set(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(rhs.get());
        Ok(())
    }

    fn value_equals(&self, rhs: &Self) -> bool {
        self.get() == rhs.get()
    }

    fn set_zero(&mut self) {
        self.set_value(0);
    }

    fn set_one(&mut self) {
        self.set_value(1);
    }

    fn add(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get().wrapping_add(rhs.get()));
        Ok(())
    }

    fn sub(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get().wrapping_sub(rhs.get()));
        Ok(())
    }

    fn mul(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get().wrapping_mul(rhs.get()));
        Ok(())
    }

    fn div(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get() / rhs.get());
        Ok(())
    }

    /// Scales the unsigned value and rounds to nearest; negative results
    /// saturate to zero before truncation.
    fn scale(&mut self, s: f64) {
        self.set_value((self.get() as f64 * s).round() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn truncation_law() {
        // set(v); get() == v mod 2^BITS for values past the range
        for v in 0u64..16 {
            let p = U2Pixel::with_value(v);
            assert_eq!(p.get(), v % 4, "v = {v}");
        }
        let p = U2Pixel::with_value(10);
        assert_eq!(p.get(), 2);
    }

    #[test]
    fn big_integer_round_trip_and_negative_truncation() {
        let p = U2Pixel::with_value(2);
        assert_eq!(p.get_big_integer(), BigInt::from(2));

        let zero = U2Pixel::with_value(0);
        assert_eq!(zero.get_big_integer(), BigInt::from(0));

        let mut p = U2Pixel::with_value(10);
        assert_eq!(p.get(), 2);
        p.set_big_integer(&BigInt::from(-122));
        assert_eq!(p.get(), 2); // -122 ≡ 2 (mod 4)
    }

    #[test]
    fn neighbors_in_the_same_word_are_untouched() {
        let store = ArrayStore::from_words(vec![0u64]);
        let proto = U2Pixel::prototype();
        let mut a = proto.duplicate_on(&store);
        let mut b = proto.duplicate_on(&store);
        a.update_index(0);
        b.update_index(1);

        a.set_value(3);
        b.set_value(1);
        assert_eq!(a.get(), 3);
        assert_eq!(b.get(), 1);

        a.set_value(0);
        assert_eq!(b.get(), 1);
        assert_eq!(store.get(0), 0b0100);
    }

    #[test]
    fn wrapping_arithmetic() {
        let mut a = U2Pixel::with_value(3);
        let b = U2Pixel::with_value(2);
        a.add(&b).unwrap(); // 5 mod 4
        assert_eq!(a.get(), 1);
        a.sub(&b).unwrap(); // -1 mod 4
        assert_eq!(a.get(), 3);
    }

    #[test]
    fn four_bit_packing_layout() {
        assert_eq!(U4Pixel::pixels_per_word(), 16);
        let store = ArrayStore::from_words(vec![0u64; 2]);
        let mut p = U4Pixel::prototype().duplicate_on(&store);
        p.update_index(16); // first pixel of the second word
        p.set_value(0xF);
        assert_eq!(store.get(0), 0);
        assert_eq!(store.get(1), 0xF);
    }
}
