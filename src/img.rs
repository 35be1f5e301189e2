//! Flat array-backed containers.
//!
//! An [`ArrayImg`] owns exactly one backing store and a fixed dimension
//! vector. The store length is always `entities_per_pixel × product(dims)`,
//! rounded up to whole words for packed pixel types. Containers are created
//! once and never resized; views reference them without copying.

use log::debug;

use crate::access::{Cursor, RandomAccess};
use crate::error::ImgError;
use crate::interval::Interval;
use crate::pixel::NativePixel;
use crate::store::ArrayStore;

/// N-dimensional container over one flat backing store.
///
/// Strides are row-major with the last axis fastest; accessors translate
/// coordinates to flat pixel indices with them.
#[derive(Clone, Debug)]
pub struct ArrayImg<T: NativePixel> {
    dims: Vec<i64>,
    strides: Vec<i64>,
    interval: Interval,
    num_pixels: i64,
    store: ArrayStore<T::Word>,
    proto: T,
}

impl<T: NativePixel> ArrayImg<T> {
    /// Allocate a zero-filled container shaped like `proto` with the given
    /// dimensions.
    ///
    /// Fails before allocating anything if a dimension is non-positive or
    /// the pixel count / store length overflows; no partial container is
    /// ever left behind.
    pub fn new(proto: &T, dims: &[i64]) -> Result<Self, ImgError> {
        let (interval, strides, num_pixels, store_len) = Self::geometry(proto, dims)?;
        debug!(
            "allocating ArrayImg dims={dims:?} pixels={num_pixels} words={store_len}"
        );
        Ok(Self {
            dims: dims.to_vec(),
            strides,
            interval,
            num_pixels,
            store: ArrayStore::new(store_len),
            proto: proto.copy(),
        })
    }

    /// Build a container over pre-populated raw words, e.g. handed over by
    /// an I/O layer. The word count must match the store length invariant
    /// exactly.
    pub fn from_words(proto: &T, dims: &[i64], words: Vec<T::Word>) -> Result<Self, ImgError> {
        let (interval, strides, num_pixels, store_len) = Self::geometry(proto, dims)?;
        if words.len() != store_len {
            return Err(ImgError::StoreLengthMismatch {
                required: store_len,
                actual: words.len(),
            });
        }
        Ok(Self {
            dims: dims.to_vec(),
            strides,
            interval,
            num_pixels,
            store: ArrayStore::from_words(words),
            proto: proto.copy(),
        })
    }

    fn geometry(
        proto: &T,
        dims: &[i64],
    ) -> Result<(Interval, Vec<i64>, i64, usize), ImgError> {
        let interval = Interval::from_dims(dims)?;

        let mut num_pixels: i64 = 1;
        for &d in dims {
            num_pixels = num_pixels
                .checked_mul(d)
                .ok_or_else(|| ImgError::CapacityOverflow(dims.to_vec()))?;
        }

        let store_len = proto
            .entities_per_pixel()
            .mul_ceil(num_pixels as u64)
            .and_then(|w| usize::try_from(w).ok())
            .ok_or_else(|| ImgError::CapacityOverflow(dims.to_vec()))?;

        // row-major strides, last axis fastest
        let mut strides = vec![1i64; dims.len()];
        for d in (0..dims.len().saturating_sub(1)).rev() {
            strides[d] = strides[d + 1] * dims[d + 1];
        }

        Ok((interval, strides, num_pixels, store_len))
    }

    #[inline]
    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    #[inline]
    pub fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn num_pixels(&self) -> i64 {
        self.num_pixels
    }

    /// The container's native interval: `[0, dims[d] - 1]` per axis.
    pub fn interval(&self) -> Interval {
        self.interval.clone()
    }

    /// The shared backing store handle.
    pub fn store(&self) -> &ArrayStore<T::Word> {
        &self.store
    }

    /// The prototype pixel this container was shaped after (detached).
    pub fn prototype(&self) -> &T {
        &self.proto
    }

    pub(crate) fn strides(&self) -> &[i64] {
        &self.strides
    }

    /// A pixel instance bound to this container's store at pixel index 0.
    pub(crate) fn bound_pixel(&self) -> T {
        self.proto.duplicate_on(&self.store)
    }

    /// Positional accessor; coordinates are the caller's responsibility.
    pub fn random_access(&self) -> RandomAccess<T> {
        RandomAccess::new(self)
    }

    /// Restartable single-pass cursor over every coordinate, row-major with
    /// the last axis fastest.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{F64Pixel, F64VectorPixel, U2Pixel};

    #[test]
    fn store_length_invariant_word_aligned() {
        let img = ArrayImg::new(&F64Pixel::prototype(), &[5, 4, 3]).unwrap();
        assert_eq!(img.num_pixels(), 60);
        assert_eq!(img.store().len(), 60);

        let vec_img = ArrayImg::new(&F64VectorPixel::prototype(3), &[4, 5]).unwrap();
        assert_eq!(vec_img.store().len(), 60);
    }

    #[test]
    fn store_length_invariant_packed() {
        // 6000 2-bit pixels, 32 per word, rounded up
        let img = ArrayImg::new(&U2Pixel::prototype(), &[10, 20, 30]).unwrap();
        assert_eq!(img.store().len(), 188);
    }

    #[test]
    fn rejects_bad_geometry() {
        assert!(matches!(
            ArrayImg::new(&F64Pixel::prototype(), &[5, 0]),
            Err(ImgError::InvalidDimensions(_))
        ));
        assert!(matches!(
            ArrayImg::new(&F64Pixel::prototype(), &[i64::MAX, 2]),
            Err(ImgError::CapacityOverflow(_))
        ));
    }

    #[test]
    fn from_words_checks_length() {
        let words = vec![0u64; 187];
        assert!(matches!(
            ArrayImg::from_words(&U2Pixel::prototype(), &[10, 20, 30], words),
            Err(ImgError::StoreLengthMismatch {
                required: 188,
                actual: 187
            })
        ));

        let img =
            ArrayImg::from_words(&F64Pixel::prototype(), &[2, 2], vec![1.0, 2.0, 3.0, 4.0])
                .unwrap();
        let mut ra = img.random_access();
        ra.set_position(&[1, 0]);
        assert_eq!(ra.pixel().get(), 3.0);
    }

    #[test]
    fn strides_are_row_major_last_fastest() {
        let img = ArrayImg::new(&F64Pixel::prototype(), &[5, 4, 3]).unwrap();
        assert_eq!(img.strides(), &[12, 3, 1]);
    }
}
