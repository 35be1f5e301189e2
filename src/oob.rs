//! Out-of-bounds strategies.
//!
//! A strategy supplies a value for any coordinate outside a source interval
//! without materializing an enlarged buffer. The non-constant variants are
//! pure per-axis mappings from an outside coordinate to an inside one; the
//! constant variant supplies a fixed detached pixel value instead.

use crate::interval::Interval;

/// How a view extension produces values beyond its source interval.
#[derive(Clone, Debug)]
pub enum OutOfBounds<T> {
    /// A fixed value for every outside coordinate. Holds a detached pixel.
    Constant(T),
    /// Clamp each axis to the nearest border coordinate.
    Border,
    /// Mirror across the boundary without repeating the edge pixel
    /// (period `2n - 2` per axis of extent `n`).
    MirrorSingle,
    /// Mirror across the boundary repeating the edge pixel
    /// (period `2n` per axis).
    MirrorDouble,
    /// Wrap around periodically (period `n` per axis).
    Periodic,
}

impl<T> OutOfBounds<T> {
    /// Map `pos` into `interval` in place. Returns `false` for the constant
    /// strategy, which supplies a value instead of a source coordinate.
    ///
    /// Coordinates already inside are left untouched by every mapping.
    pub fn map_into(&self, pos: &mut [i64], interval: &Interval) -> bool {
        match self {
            OutOfBounds::Constant(_) => false,
            OutOfBounds::Border => {
                for (d, p) in pos.iter_mut().enumerate() {
                    *p = (*p).clamp(interval.min(d), interval.max(d));
                }
                true
            }
            OutOfBounds::MirrorSingle => {
                for (d, p) in pos.iter_mut().enumerate() {
                    let n = interval.size(d);
                    if n == 1 {
                        *p = interval.min(d);
                        continue;
                    }
                    let period = 2 * n - 2;
                    let mut q = (*p - interval.min(d)).rem_euclid(period);
                    if q >= n {
                        q = period - q;
                    }
                    *p = interval.min(d) + q;
                }
                true
            }
            OutOfBounds::MirrorDouble => {
                for (d, p) in pos.iter_mut().enumerate() {
                    let n = interval.size(d);
                    let mut q = (*p - interval.min(d)).rem_euclid(2 * n);
                    if q >= n {
                        q = 2 * n - 1 - q;
                    }
                    *p = interval.min(d) + q;
                }
                true
            }
            OutOfBounds::Periodic => {
                for (d, p) in pos.iter_mut().enumerate() {
                    let n = interval.size(d);
                    *p = interval.min(d) + (*p - interval.min(d)).rem_euclid(n);
                }
                true
            }
        }
    }

    /// The constant pixel, if this is the constant strategy.
    pub fn constant(&self) -> Option<&T> {
        match self {
            OutOfBounds::Constant(c) => Some(c),
            _ => None,
        }
    }
}
