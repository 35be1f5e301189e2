//! Error taxonomy of the crate.
//!
//! Almost everything here is synchronous in-memory arithmetic, so the only
//! recoverable failures are construction-time ones (bad geometry, overflowing
//! store sizes, malformed config) plus the component-shape mismatch of
//! composite pixel arithmetic. Out-of-range coordinates on plain accessors
//! are a caller error and panic on store indexing; packed narrowing is
//! deterministic truncation and never an error.

use std::path::PathBuf;

/// Component counts of two composite pixels differ.
///
/// Component-wise arithmetic between mismatched shapes has no defined
/// result; it fails loudly instead of silently using the smaller shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub lhs: usize,
    pub rhs: usize,
}

impl std::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pixel component counts differ ({} vs {})",
            self.lhs, self.rhs
        )
    }
}

impl std::error::Error for ShapeMismatch {}

/// Failures surfaced by container creation, view queries and config loading.
#[derive(Debug)]
pub enum ImgError {
    /// Dimension vector is empty or contains a non-positive extent.
    InvalidDimensions(Vec<i64>),
    /// Pixel count or backing store length overflows the addressable range.
    /// Raised before any allocation; no partial container is created.
    CapacityOverflow(Vec<i64>),
    /// A pre-populated backing store has the wrong length.
    StoreLengthMismatch { required: usize, actual: usize },
    /// Component counts of two composite pixels differ.
    Shape(ShapeMismatch),
    /// Interval minimum exceeds maximum, or bound vectors differ in length.
    InvalidInterval { min: Vec<i64>, max: Vec<i64> },
    /// A cursor was requested on a view with no interval (e.g. directly on
    /// an out-of-bounds extension).
    UnboundedView,
    /// Failed to read a config file.
    ConfigRead { path: PathBuf, source: std::io::Error },
    /// Failed to parse a config file.
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Config element kind does not match the requested container type.
    ConfigElementKind { expected: &'static str, found: String },
}

impl std::fmt::Display for ImgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImgError::InvalidDimensions(dims) => {
                write!(f, "invalid dimensions {dims:?} (every extent must be > 0)")
            }
            ImgError::CapacityOverflow(dims) => {
                write!(f, "dimensions {dims:?} overflow the backing store capacity")
            }
            ImgError::StoreLengthMismatch { required, actual } => {
                write!(
                    f,
                    "backing store length {actual} does not match required {required}"
                )
            }
            ImgError::Shape(e) => write!(f, "{e}"),
            ImgError::InvalidInterval { min, max } => {
                write!(f, "inconsistent interval bounds (min {min:?}, max {max:?})")
            }
            ImgError::UnboundedView => {
                write!(f, "view is unbounded; this operation requires an interval")
            }
            ImgError::ConfigRead { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ImgError::ConfigParse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
            ImgError::ConfigElementKind { expected, found } => {
                write!(f, "config element kind {found} where {expected} was expected")
            }
        }
    }
}

impl std::error::Error for ImgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImgError::Shape(e) => Some(e),
            ImgError::ConfigRead { source, .. } => Some(source),
            ImgError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ShapeMismatch> for ImgError {
    fn from(e: ShapeMismatch) -> Self {
        ImgError::Shape(e)
    }
}
