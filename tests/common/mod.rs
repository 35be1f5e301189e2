use ndimg::prelude::*;

/// Fills an f64 container with its row-major flat index (last axis fastest)
/// and returns it, so tests can predict the value at any coordinate.
pub fn sequential_f64(dims: &[i64]) -> ArrayImg<F64Pixel> {
    let img = ArrayImg::new(&F64Pixel::prototype(), dims).expect("valid test dimensions");
    let mut cursor = img.cursor();
    let mut i = 0.0;
    while cursor.has_next() {
        cursor.fwd();
        cursor.pixel_mut().set_value(i);
        i += 1.0;
    }
    img
}

/// The row-major flat index of `pos` in a container of extent `dims`.
#[allow(dead_code)] // not every test binary uses it
pub fn flat_index(dims: &[i64], pos: &[i64]) -> f64 {
    let mut i = 0i64;
    for d in 0..dims.len() {
        i = i * dims[d] + pos[d];
    }
    i as f64
}
