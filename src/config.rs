//! Array geometry configuration.
//!
//! Upstream layers (CLI tools, pipeline drivers) describe the container they
//! want — a dimension vector plus an element kind — in a small JSON
//! document. This module deserializes that description and builds the
//! matching container.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ImgError;
use crate::img::ArrayImg;
use crate::pixel::{F64MatrixPixel, F64Pixel, F64VectorPixel, U2Pixel, U4Pixel};

/// Logical element kind of a configured container.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ElementKind {
    F64,
    F64Vector { len: usize },
    F64Matrix { rows: usize, cols: usize },
    U2,
    U4,
}

/// Container geometry as described by a config file.
#[derive(Clone, Debug, Deserialize)]
pub struct GeometryConfig {
    pub dims: Vec<i64>,
    pub element: ElementKind,
}

/// Load a geometry description from a JSON file.
pub fn load_config(path: &Path) -> Result<GeometryConfig, ImgError> {
    let data = fs::read_to_string(path).map_err(|source| ImgError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GeometryConfig =
        serde_json::from_str(&data).map_err(|source| ImgError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded geometry config from {}: {config:?}", path.display());
    Ok(config)
}

impl GeometryConfig {
    fn kind_mismatch(&self, expected: &'static str) -> ImgError {
        ImgError::ConfigElementKind {
            expected,
            found: format!("{:?}", self.element),
        }
    }

    /// Build the configured f64 scalar container.
    pub fn create_f64(&self) -> Result<ArrayImg<F64Pixel>, ImgError> {
        match self.element {
            ElementKind::F64 => ArrayImg::new(&F64Pixel::prototype(), &self.dims),
            _ => Err(self.kind_mismatch("f64")),
        }
    }

    /// Build the configured f64 vector container.
    pub fn create_f64_vector(&self) -> Result<ArrayImg<F64VectorPixel>, ImgError> {
        match self.element {
            ElementKind::F64Vector { len } => {
                ArrayImg::new(&F64VectorPixel::prototype(len), &self.dims)
            }
            _ => Err(self.kind_mismatch("f64_vector")),
        }
    }

    /// Build the configured f64 matrix container.
    pub fn create_f64_matrix(&self) -> Result<ArrayImg<F64MatrixPixel>, ImgError> {
        match self.element {
            ElementKind::F64Matrix { rows, cols } => {
                ArrayImg::new(&F64MatrixPixel::prototype(rows, cols), &self.dims)
            }
            _ => Err(self.kind_mismatch("f64_matrix")),
        }
    }

    /// Build the configured 2-bit packed container.
    pub fn create_u2(&self) -> Result<ArrayImg<U2Pixel>, ImgError> {
        match self.element {
            ElementKind::U2 => ArrayImg::new(&U2Pixel::prototype(), &self.dims),
            _ => Err(self.kind_mismatch("u2")),
        }
    }

    /// Build the configured 4-bit packed container.
    pub fn create_u4(&self) -> Result<ArrayImg<U4Pixel>, ImgError> {
        match self.element {
            ElementKind::U4 => ArrayImg::new(&U4Pixel::prototype(), &self.dims),
            _ => Err(self.kind_mismatch("u4")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_builds_containers() {
        let config: GeometryConfig = serde_json::from_str(
            r#"{ "dims": [10, 20, 30], "element": { "kind": "u2" } }"#,
        )
        .unwrap();
        let img = config.create_u2().unwrap();
        assert_eq!(img.dims(), &[10, 20, 30]);
        assert_eq!(img.store().len(), 188);

        let config: GeometryConfig = serde_json::from_str(
            r#"{ "dims": [4, 5], "element": { "kind": "f64_vector", "len": 3 } }"#,
        )
        .unwrap();
        let img = config.create_f64_vector().unwrap();
        assert_eq!(img.store().len(), 60);
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let config: GeometryConfig =
            serde_json::from_str(r#"{ "dims": [2, 2], "element": { "kind": "f64" } }"#)
                .unwrap();
        assert!(matches!(
            config.create_u2(),
            Err(ImgError::ConfigElementKind { expected: "u2", .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Path::new("/nonexistent/geometry.json")).unwrap_err();
        assert!(matches!(err, ImgError::ConfigRead { .. }));
    }
}
