//! Defined-bounds propagation over a tree of views built on one container.

mod common;

use common::sequential_f64;
use ndimg::prelude::*;

#[test]
fn defined_bounds_through_a_view_tree() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dims = [5i64, 4, 3];
    let img = sequential_f64(&dims);

    // extension alone: nothing is guaranteed genuine
    let extended = view::extend_zero(&img);
    assert_eq!(extended.defined_bounds(), None);

    // restricting the extended view does not bring the bounds back
    let windowed_extension = view::interval(view::extend_zero(&img), img.interval().expand(2));
    assert_eq!(windowed_extension.defined_bounds(), None);

    // restricting the plain container reports the container's own interval,
    // whether the window grows or shrinks it
    let grown = view::interval(&img, img.interval().expand(2));
    assert_eq!(grown.defined_bounds(), Some(img.interval()));

    let shrunk = view::interval(&img, img.interval().expand(-1));
    assert_eq!(shrunk.defined_bounds(), Some(img.interval()));

    // translation shifts the bounds
    let translated = view::translate(&img, &[10, 10, 10]);
    assert_eq!(
        translated.defined_bounds(),
        Some(Interval::new(vec![10, 10, 10], vec![14, 13, 12]).unwrap())
    );

    // restricting the translated view passes the shifted bounds through
    let translated_interval = translated.interval().unwrap();
    let windowed_translation = view::interval(translated, translated_interval.expand(-2));
    assert_eq!(
        windowed_translation.defined_bounds(),
        Some(Interval::new(vec![10, 10, 10], vec![14, 13, 12]).unwrap())
    );

    // extending the translated view erases them again
    let extended_translation = view::extend_zero(view::translate(&img, &[10, 10, 10]));
    assert_eq!(extended_translation.defined_bounds(), None);
}

#[test]
fn translate_then_untranslate_restores_the_bounds() {
    let img = sequential_f64(&[5, 4, 3]);
    let roundtrip = view::translate(view::translate(&img, &[3, -1, 8]), &[-3, 1, -8]);
    assert_eq!(roundtrip.defined_bounds(), Some(img.interval()));
}

#[test]
fn defined_bounds_queries_are_repeatable() {
    // chain-walk, not a cache: repeated queries recompute the same answer
    let img = sequential_f64(&[5, 4, 3]);
    let v = view::interval(view::translate(&img, &[1, 2, 3]), img.interval().expand(4));
    let first = v.defined_bounds();
    assert_eq!(v.defined_bounds(), first);
    assert_eq!(
        first,
        Some(Interval::new(vec![1, 2, 3], vec![5, 5, 5]).unwrap())
    );
}
