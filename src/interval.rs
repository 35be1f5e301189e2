//! Axis-aligned closed integer boxes.
//!
//! An [`Interval`] is purely descriptive: per-axis inclusive minimum and
//! maximum, no data. Containers report their native interval (zero-based),
//! views translate and restrict intervals, and the defined-bounds query
//! returns intervals (or nothing) back to the caller.

use serde::{Deserialize, Serialize};

use crate::error::ImgError;

/// Axis-aligned box `[min[d], max[d]]` (both ends inclusive) per axis `d`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    min: Vec<i64>,
    max: Vec<i64>,
}

impl Interval {
    /// Construct from per-axis inclusive bounds.
    pub fn new(min: Vec<i64>, max: Vec<i64>) -> Result<Self, ImgError> {
        if min.len() != max.len()
            || min.is_empty()
            || min.iter().zip(&max).any(|(lo, hi)| lo > hi)
        {
            return Err(ImgError::InvalidInterval { min, max });
        }
        Ok(Self { min, max })
    }

    /// Zero-based interval of a dimension vector: `[0, dims[d] - 1]`.
    pub fn from_dims(dims: &[i64]) -> Result<Self, ImgError> {
        if dims.is_empty() || dims.iter().any(|&d| d <= 0) {
            return Err(ImgError::InvalidDimensions(dims.to_vec()));
        }
        Ok(Self {
            min: vec![0; dims.len()],
            max: dims.iter().map(|&d| d - 1).collect(),
        })
    }

    #[inline]
    pub fn num_dimensions(&self) -> usize {
        self.min.len()
    }

    #[inline]
    pub fn min(&self, d: usize) -> i64 {
        self.min[d]
    }

    #[inline]
    pub fn max(&self, d: usize) -> i64 {
        self.max[d]
    }

    pub fn mins(&self) -> &[i64] {
        &self.min
    }

    pub fn maxs(&self) -> &[i64] {
        &self.max
    }

    /// Extent along axis `d`.
    #[inline]
    pub fn size(&self, d: usize) -> i64 {
        self.max[d] - self.min[d] + 1
    }

    /// Total number of coordinates inside the box.
    pub fn num_elements(&self) -> i64 {
        (0..self.num_dimensions()).map(|d| self.size(d)).product()
    }

    /// Whether `pos` lies inside the box. Panics if the rank differs.
    pub fn contains(&self, pos: &[i64]) -> bool {
        assert_eq!(pos.len(), self.min.len(), "coordinate rank mismatch");
        pos.iter()
            .enumerate()
            .all(|(d, &p)| p >= self.min[d] && p <= self.max[d])
    }

    /// The box shifted by `offset` per axis.
    pub fn translate(&self, offset: &[i64]) -> Self {
        assert_eq!(offset.len(), self.min.len(), "offset rank mismatch");
        Self {
            min: self.min.iter().zip(offset).map(|(m, o)| m + o).collect(),
            max: self.max.iter().zip(offset).map(|(m, o)| m + o).collect(),
        }
    }

    /// The box grown (or shrunk, for negative `border`) by `border` on every
    /// side of every axis.
    pub fn expand(&self, border: i64) -> Self {
        Self {
            min: self.min.iter().map(|m| m - border).collect(),
            max: self.max.iter().map(|m| m + border).collect(),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?} .. {:?}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dims_is_zero_based() {
        let iv = Interval::from_dims(&[5, 4, 3]).unwrap();
        assert_eq!(iv.mins(), &[0, 0, 0]);
        assert_eq!(iv.maxs(), &[4, 3, 2]);
        assert_eq!(iv.num_elements(), 60);
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(Interval::new(vec![0, 0], vec![1]).is_err());
        assert!(Interval::new(vec![2], vec![1]).is_err());
        assert!(Interval::from_dims(&[3, 0]).is_err());
        assert!(Interval::from_dims(&[]).is_err());
    }

    #[test]
    fn translate_and_expand() {
        let iv = Interval::from_dims(&[5, 4, 3]).unwrap();
        let t = iv.translate(&[10, 10, 10]);
        assert_eq!(t.mins(), &[10, 10, 10]);
        assert_eq!(t.maxs(), &[14, 13, 12]);

        let e = iv.expand(2);
        assert_eq!(e.mins(), &[-2, -2, -2]);
        assert_eq!(e.maxs(), &[6, 5, 4]);

        let s = iv.expand(-1);
        assert_eq!(s.mins(), &[1, 1, 1]);
        assert_eq!(s.maxs(), &[3, 2, 1]);
    }

    #[test]
    fn contains_is_inclusive() {
        let iv = Interval::from_dims(&[5, 4, 3]).unwrap();
        assert!(iv.contains(&[0, 0, 0]));
        assert!(iv.contains(&[4, 3, 2]));
        assert!(!iv.contains(&[5, 0, 0]));
        assert!(!iv.contains(&[0, -1, 0]));
    }
}
