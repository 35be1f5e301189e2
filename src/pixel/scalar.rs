//! Word-aligned f64 scalar pixel: one store word per pixel.

use crate::error::ShapeMismatch;
use crate::fraction::Fraction;
use crate::pixel::{NativePixel, PixelOps};
use crate::store::ArrayStore;

/// A single f64 value bound to a position in an f64 backing store.
#[derive(Clone, Debug)]
pub struct F64Pixel {
    store: ArrayStore<f64>,
    idx: usize,
}

impl F64Pixel {
    /// Detached zero-valued instance, usable as a container prototype.
    pub fn prototype() -> Self {
        Self {
            store: ArrayStore::new(1),
            idx: 0,
        }
    }

    /// Detached instance holding `v`.
    pub fn with_value(v: f64) -> Self {
        let p = Self::prototype();
        p.store.set(0, v);
        p
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.store.get(self.idx)
    }

    #[inline]
    pub fn set_value(&mut self, v: f64) {
        self.store.set(self.idx, v);
    }
}

impl NativePixel for F64Pixel {
    type Word = f64;

    fn create_variable(&self) -> Self {
        Self::prototype()
    }

    fn copy(&self) -> Self {
        Self::with_value(self.get())
    }

    fn duplicate_on(&self, store: &ArrayStore<f64>) -> Self {
        Self {
            store: store.clone(),
            idx: 0,
        }
    }

    fn entities_per_pixel(&self) -> Fraction {
        Fraction::one()
    }

    #[inline]
    fn index(&self) -> usize {
        self.idx
    }

    #[inline]
    fn update_index(&mut self, i: usize) {
        self.idx = i;
    }

    fn update_store(&mut self, store: &ArrayStore<f64>) {
        self.store = store.clone();
    }
}

impl PixelOps for F64Pixel {
    fn set(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(rhs.get());
        Ok(())
    }

    fn value_equals(&self, rhs: &Self) -> bool {
        self.get() == rhs.get()
    }

    fn set_zero(&mut self) {
        self.set_value(0.0);
    }

    fn set_one(&mut self) {
        self.set_value(1.0);
    }

    fn add(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get() + rhs.get());
        Ok(())
    }

    fn sub(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get() - rhs.get());
        Ok(())
    }

    fn mul(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get() * rhs.get());
        Ok(())
    }

    fn div(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.set_value(self.get() / rhs.get());
        Ok(())
    }

    fn scale(&mut self, s: f64) {
        self.set_value(self.get() * s);
    }
}
