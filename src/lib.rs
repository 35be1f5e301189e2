#![doc = include_str!("../README.md")]

// Core data model
pub mod error;
pub mod fraction;
pub mod interval;
pub mod store;

// Native pixel types
pub mod pixel;

// Containers and accessors
pub mod access;
pub mod img;

// Lazy views
pub mod oob;
pub mod view;

// Geometry configuration for upstream layers
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{ImgError, ShapeMismatch};
pub use crate::fraction::Fraction;
pub use crate::img::ArrayImg;
pub use crate::interval::Interval;
pub use crate::oob::OutOfBounds;
pub use crate::pixel::{NativePixel, PixelOps};
pub use crate::view::View;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use ndimg::prelude::*;
///
/// let img = ArrayImg::new(&U2Pixel::prototype(), &[10, 20, 30])?;
/// let mut cursor = img.cursor();
/// while cursor.has_next() {
///     cursor.fwd();
///     cursor.pixel_mut().set_value(3);
/// }
/// assert_eq!(view::extend_periodic(&img).defined_bounds(), None);
/// # Ok::<(), ndimg::ImgError>(())
/// ```
pub mod prelude {
    pub use crate::access::{Cursor, RandomAccess};
    pub use crate::img::ArrayImg;
    pub use crate::interval::Interval;
    pub use crate::oob::OutOfBounds;
    pub use crate::pixel::{
        F64MatrixPixel, F64Pixel, F64VectorPixel, NativePixel, PackedUintPixel, PixelOps,
        U2Pixel, U4Pixel,
    };
    pub use crate::view::{self, View, ViewCursor, ViewRandomAccess};
    pub use crate::{ImgError, ShapeMismatch};
}
