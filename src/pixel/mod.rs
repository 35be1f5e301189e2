//! Native pixel types.
//!
//! Purpose
//! - Represent one logical pixel — scalar, vector, matrix, or sub-word
//!   unsigned integer — as a lightweight handle bound to a position in a
//!   flat backing store, with value semantics and arithmetic but no heap
//!   allocation on the access path.
//!
//! Design
//! - A pixel instance is not a standalone value: reading or writing it reads
//!   or writes the store at its current index. Accessors reposition the
//!   instance via [`NativePixel::update_index`] and friends; user code never
//!   calls those directly.
//! - Detached instances (from [`NativePixel::create_variable`] or
//!   [`NativePixel::copy`]) carry a private one-pixel store and serve as
//!   temporaries, prototypes, and out-of-bounds constants.
//! - Composite arithmetic is strictly component-wise in a fixed row-major
//!   enumeration order; operands of different shapes fail with
//!   [`ShapeMismatch`] rather than silently combining a prefix.

pub mod matrix;
pub mod packed;
pub mod scalar;
pub mod vector;

pub use self::matrix::F64MatrixPixel;
pub use self::packed::{PackedUintPixel, U2Pixel, U4Pixel};
pub use self::scalar::F64Pixel;
pub use self::vector::F64VectorPixel;

use num_traits::Zero;

use crate::error::ShapeMismatch;
use crate::fraction::Fraction;
use crate::store::ArrayStore;

/// A pixel type storable in a flat primitive backing store.
///
/// Implementations bind a store handle and a mutable logical index; the
/// index is in pixels, and the type itself translates it to word positions
/// (multiplying for multi-word pixels, dividing for packed ones).
pub trait NativePixel: Sized {
    /// Primitive word type of the backing store.
    type Word: Copy + Zero + std::fmt::Debug;

    /// Detached zero-valued instance of the same shape as `self`, backed by
    /// a private one-pixel store.
    fn create_variable(&self) -> Self;

    /// Detached instance holding the same value as `self`.
    fn copy(&self) -> Self;

    /// Instance of the same shape bound to `store` at pixel index 0.
    fn duplicate_on(&self, store: &ArrayStore<Self::Word>) -> Self;

    /// Storage words consumed per logical pixel, as a rational number.
    fn entities_per_pixel(&self) -> Fraction;

    /// Current pixel index into the backing store.
    fn index(&self) -> usize;

    /// Reposition to pixel index `i`.
    fn update_index(&mut self, i: usize);

    /// Re-bind to another backing store, keeping the current index. Hook for
    /// chunked containers that swap physical buffers under a live pixel.
    fn update_store(&mut self, store: &ArrayStore<Self::Word>);

    #[inline]
    fn inc_index(&mut self) {
        let i = self.index();
        self.update_index(i + 1);
    }

    #[inline]
    fn inc_index_by(&mut self, n: usize) {
        let i = self.index();
        self.update_index(i + n);
    }

    #[inline]
    fn dec_index(&mut self) {
        let i = self.index();
        self.update_index(i - 1);
    }

    #[inline]
    fn dec_index_by(&mut self, n: usize) {
        let i = self.index();
        self.update_index(i - n);
    }
}

/// Value assignment, comparison and in-place component-wise arithmetic.
pub trait PixelOps: Sized {
    /// Assign every component of `rhs` to `self`.
    fn set(&mut self, rhs: &Self) -> Result<(), ShapeMismatch>;

    /// Component-wise equality. `false` for mismatched shapes.
    fn value_equals(&self, rhs: &Self) -> bool;

    /// Set every component to the additive identity.
    fn set_zero(&mut self);

    /// Set every component to the multiplicative identity.
    fn set_one(&mut self);

    /// `self[c] += rhs[c]` for every component `c`.
    fn add(&mut self, rhs: &Self) -> Result<(), ShapeMismatch>;

    /// `self[c] -= rhs[c]` for every component `c`.
    fn sub(&mut self, rhs: &Self) -> Result<(), ShapeMismatch>;

    /// `self[c] *= rhs[c]` for every component `c`.
    fn mul(&mut self, rhs: &Self) -> Result<(), ShapeMismatch>;

    /// `self[c] /= rhs[c]` for every component `c`.
    fn div(&mut self, rhs: &Self) -> Result<(), ShapeMismatch>;

    /// Multiply every component by a scalar.
    fn scale(&mut self, s: f64);
}

#[inline]
pub(crate) fn check_shape(lhs: usize, rhs: usize) -> Result<(), ShapeMismatch> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(ShapeMismatch { lhs, rhs })
    }
}
