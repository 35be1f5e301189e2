//! Positional accessors over containers.
//!
//! Purpose
//! - Translate coordinate vectors ([`RandomAccess`]) or a fixed traversal
//!   order ([`Cursor`]) into backing-store index updates on a bound pixel
//!   instance, with no allocation per access.
//!
//! Design
//! - Both accessors own an independent pixel instance bound to the
//!   container's store, so interleaved accessors are safe to advance — but
//!   they alias one buffer: a write through one is visible through any
//!   accessor addressing the same coordinate.
//! - Coordinates are not bounds-checked here. Addressing outside the
//!   container's interval is a caller error that panics on store indexing.

use crate::img::ArrayImg;
use crate::pixel::NativePixel;

/// Coordinate-addressed accessor over an [`ArrayImg`].
#[derive(Clone, Debug)]
pub struct RandomAccess<T: NativePixel> {
    pixel: T,
    strides: Vec<i64>,
    pos: Vec<i64>,
    flat: i64,
}

impl<T: NativePixel> RandomAccess<T> {
    pub(crate) fn new(img: &ArrayImg<T>) -> Self {
        let mut pixel = img.bound_pixel();
        pixel.update_index(0);
        Self {
            pixel,
            strides: img.strides().to_vec(),
            pos: vec![0; img.num_dimensions()],
            flat: 0,
        }
    }

    /// Seek to an absolute coordinate.
    pub fn set_position(&mut self, pos: &[i64]) {
        assert_eq!(pos.len(), self.pos.len(), "coordinate rank mismatch");
        self.flat = pos.iter().zip(&self.strides).map(|(p, s)| p * s).sum();
        self.pos.copy_from_slice(pos);
        self.pixel.update_index(self.flat as usize);
    }

    /// Relative move along one axis: an additive stride update, the full
    /// flat index is not recomputed.
    pub fn move_by(&mut self, delta: i64, axis: usize) {
        self.pos[axis] += delta;
        self.flat += delta * self.strides[axis];
        self.pixel.update_index(self.flat as usize);
    }

    /// Write the current coordinate into `pos`.
    pub fn localize(&self, pos: &mut [i64]) {
        pos.copy_from_slice(&self.pos);
    }

    #[inline]
    pub fn pixel(&self) -> &T {
        &self.pixel
    }

    #[inline]
    pub fn pixel_mut(&mut self) -> &mut T {
        &mut self.pixel
    }
}

/// Restartable single-pass cursor visiting every coordinate of a container
/// exactly once, row-major with the last axis fastest.
#[derive(Clone, Debug)]
pub struct Cursor<T: NativePixel> {
    pixel: T,
    dims: Vec<i64>,
    idx: i64,
    len: i64,
}

impl<T: NativePixel> Cursor<T> {
    pub(crate) fn new(img: &ArrayImg<T>) -> Self {
        Self {
            pixel: img.bound_pixel(),
            dims: img.dims().to_vec(),
            idx: -1,
            len: img.num_pixels(),
        }
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.idx + 1 < self.len
    }

    /// Advance to the next coordinate. Must be called once before the first
    /// pixel access.
    pub fn fwd(&mut self) {
        self.idx += 1;
        if self.idx == 0 {
            self.pixel.update_index(0);
        } else {
            self.pixel.inc_index();
        }
    }

    /// Restart the traversal from before the first coordinate.
    pub fn reset(&mut self) {
        self.idx = -1;
    }

    /// Write the current coordinate into `pos`.
    pub fn localize(&self, pos: &mut [i64]) {
        assert_eq!(pos.len(), self.dims.len(), "coordinate rank mismatch");
        let mut i = self.idx;
        for d in (0..self.dims.len()).rev() {
            pos[d] = i.rem_euclid(self.dims[d]);
            i /= self.dims[d];
        }
    }

    #[inline]
    pub fn pixel(&self) -> &T {
        &self.pixel
    }

    #[inline]
    pub fn pixel_mut(&mut self) -> &mut T {
        &mut self.pixel
    }
}
