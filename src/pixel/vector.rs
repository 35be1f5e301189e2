//! Runtime-length f64 vector pixel: `len` store words per pixel.

use crate::error::ShapeMismatch;
use crate::fraction::Fraction;
use crate::pixel::{check_shape, NativePixel, PixelOps};
use crate::store::ArrayStore;

/// A vector of f64 components bound to a position in an f64 backing store.
///
/// Components of pixel `i` occupy words `len * i .. len * (i + 1)`.
#[derive(Clone, Debug)]
pub struct F64VectorPixel {
    len: usize,
    store: ArrayStore<f64>,
    idx: usize,
}

impl F64VectorPixel {
    /// Detached zero vector of `len` components, usable as a prototype.
    pub fn prototype(len: usize) -> Self {
        assert!(len > 0, "vector pixel needs at least one component");
        Self {
            len,
            store: ArrayStore::new(len),
            idx: 0,
        }
    }

    /// Detached vector initialized from `components`.
    pub fn from_components(components: &[f64]) -> Self {
        let mut p = Self::prototype(components.len());
        for (d, &v) in components.iter().enumerate() {
            p.set_component(d, v);
        }
        p
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn component(&self, d: usize) -> f64 {
        debug_assert!(d < self.len);
        self.store.get(self.len * self.idx + d)
    }

    #[inline]
    pub fn set_component(&mut self, d: usize, v: f64) {
        debug_assert!(d < self.len);
        self.store.set(self.len * self.idx + d, v);
    }

    fn combine(
        &mut self,
        rhs: &Self,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<(), ShapeMismatch> {
        check_shape(self.len, rhs.len)?;
        for d in 0..self.len {
            self.set_component(d, f(self.component(d), rhs.component(d)));
        }
        Ok(())
    }

    fn fill(&mut self, v: f64) {
        for d in 0..self.len {
            self.set_component(d, v);
        }
    }
}

impl NativePixel for F64VectorPixel {
    type Word = f64;

    fn create_variable(&self) -> Self {
        Self::prototype(self.len)
    }

    fn copy(&self) -> Self {
        let mut t = self.create_variable();
        for d in 0..self.len {
            t.set_component(d, self.component(d));
        }
        t
    }

    fn duplicate_on(&self, store: &ArrayStore<f64>) -> Self {
        Self {
            len: self.len,
            store: store.clone(),
            idx: 0,
        }
    }

    fn entities_per_pixel(&self) -> Fraction {
        Fraction::new(self.len as u64, 1)
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

impl PixelOps for F64VectorPixel {
    fn set(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.combine(rhs, |_, b| b)
    }

    fn value_equals(&self, rhs: &Self) -> bool {
        self.len == rhs.len && (0..self.len).all(|d| self.component(d) == rhs.component(d))
    }

    fn set_zero(&mut self) {
        self.fill(0.0);
    }

    fn set_one(&mut self) {
        self.fill(1.0);
    }

    fn add(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.combine(rhs, |a, b| a + b)
    }

    fn sub(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.combine(rhs, |a, b| a - b)
    }

    fn mul(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.combine(rhs, |a, b| a * b)
    }

    fn div(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.combine(rhs, |a, b| a / b)
    }

    fn scale(&mut self, s: f64) {
        for d in 0..self.len {
            self.set_component(d, self.component(d) * s);
        }
    }
}
