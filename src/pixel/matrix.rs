//! Two-dimensional f64 matrix pixel: `rows * cols` store words per pixel.
//!
//! Components are enumerated row-major: entry `(r, c)` of pixel `i` lives at
//! word `rows * cols * i + r * cols + c`. All component-wise operations use
//! this fixed order; matrix-matrix products are out of scope (algorithm
//! library territory).

use crate::error::ShapeMismatch;
use crate::fraction::Fraction;
use crate::pixel::{check_shape, NativePixel, PixelOps};
use crate::store::ArrayStore;

/// A `rows × cols` matrix of f64 entries bound to an f64 backing store.
#[derive(Clone, Debug)]
pub struct F64MatrixPixel {
    rows: usize,
    cols: usize,
    store: ArrayStore<f64>,
    idx: usize,
}

impl F64MatrixPixel {
    /// Detached zero matrix, usable as a prototype.
    pub fn prototype(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix pixel needs positive shape");
        Self {
            rows,
            cols,
            store: ArrayStore::new(rows * cols),
            idx: 0,
        }
    }

    /// Detached matrix from row-major `components`; length must be
    /// `rows * cols`.
    pub fn from_components(rows: usize, cols: usize, components: &[f64]) -> Self {
        assert_eq!(components.len(), rows * cols, "component count mismatch");
        let mut p = Self::prototype(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                p.set_component(r, c, components[r * cols + c]);
            }
        }
        p
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn num_components(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn component(&self, r: usize, c: usize) -> f64 {
        debug_assert!(r < self.rows && c < self.cols);
        self.store
            .get(self.num_components() * self.idx + r * self.cols + c)
    }

    #[inline]
    pub fn set_component(&mut self, r: usize, c: usize, v: f64) {
        debug_assert!(r < self.rows && c < self.cols);
        self.store
            .set(self.num_components() * self.idx + r * self.cols + c, v);
    }

    /// Shapes must agree in rows and columns, not just component count.
    fn check_same_shape(&self, rhs: &Self) -> Result<(), ShapeMismatch> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(ShapeMismatch {
                lhs: self.num_components(),
                rhs: rhs.num_components(),
            });
        }
        check_shape(self.num_components(), rhs.num_components())
    }

    fn combine(
        &mut self,
        rhs: &Self,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<(), ShapeMismatch> {
        self.check_same_shape(rhs)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.set_component(r, c, f(self.component(r, c), rhs.component(r, c)));
            }
        }
        Ok(())
    }

    fn fill(&mut self, v: f64) {
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.set_component(r, c, v);
            }
        }
    }
}

impl NativePixel for F64MatrixPixel {
    type Word = f64;

    fn create_variable(&self) -> Self {
        Self::prototype(self.rows, self.cols)
    }

    fn copy(&self) -> Self {
        let mut t = self.create_variable();
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.set_component(r, c, self.component(r, c));
            }
        }
        t
    }

    fn duplicate_on(&self, store: &ArrayStore<f64>) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            store: store.clone(),
            idx: 0,
        }
    }

    fn entities_per_pixel(&self) -> Fraction {
        Fraction::new(self.num_components() as u64, 1)
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

impl PixelOps for F64MatrixPixel {
    fn set(&mut self, rhs: &Self) -> Result<(), ShapeMismatch> {
        self.combine(rhs, |_, b| b)
    }

    fn value_equals(&self, rhs: &Self) -> bool {
        self.rows == rhs.rows
            && self.cols == rhs.cols
            && (0..self.rows).all(|r| {
                (0..self.cols).all(|c| self.component(r, c) == rhs.component(r, c))
            })
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
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.set_component(r, c, self.component(r, c) * s);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_component_layout() {
        let m = F64MatrixPixel::from_components(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.component(0, 2), 3.0);
        assert_eq!(m.component(1, 0), 4.0);
    }

    #[test]
    fn entrywise_product_is_not_matrix_product() {
        let mut a = F64MatrixPixel::from_components(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = F64MatrixPixel::from_components(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        a.mul(&b).unwrap();
        assert!(a.value_equals(&F64MatrixPixel::from_components(
            2,
            2,
            &[5.0, 12.0, 21.0, 32.0]
        )));
    }

    #[test]
    fn transposed_shape_is_a_mismatch() {
        // 2×3 and 3×2 have equal component counts but are not combinable.
        let mut a = F64MatrixPixel::prototype(2, 3);
        let b = F64MatrixPixel::prototype(3, 2);
        assert!(a.add(&b).is_err());
        assert!(!a.value_equals(&b));
    }
}
