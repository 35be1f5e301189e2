//! Packed 2-bit containers: randomized round-trips and truncation laws.

use ndimg::prelude::*;
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn randomized_cursor_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();

    let img = ArrayImg::new(&U2Pixel::prototype(), &[10, 20, 30]).unwrap();
    assert_eq!(img.num_pixels(), 6000);

    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<u64> = (0..img.num_pixels()).map(|_| rng.gen_range(0..4)).collect();

    let mut cursor = img.cursor();
    for &v in &values {
        assert!(cursor.has_next());
        cursor.fwd();
        cursor.pixel_mut().set_value(v);
    }
    assert!(!cursor.has_next());

    cursor.reset();
    for &v in &values {
        cursor.fwd();
        assert_eq!(cursor.pixel().get(), v);
    }
}

#[test]
fn truncation_for_values_past_the_range() {
    // set(v); get() == v mod 4, well past 2^(w+2)
    for v in 0u64..16 {
        let p = U2Pixel::with_value(v);
        assert_eq!(p.get(), v % 4, "v = {v}");
    }
}

#[test]
fn big_integer_conversions() {
    let two = U2Pixel::with_value(2);
    assert_eq!(two.get_big_integer(), BigInt::from(2));

    let zero = U2Pixel::with_value(0);
    assert_eq!(zero.get_big_integer(), BigInt::from(0));

    // constructing from 10 truncates to 10 mod 4
    let mut p = U2Pixel::with_value(10);
    assert_eq!(p.get(), 2);

    // negative arbitrary-precision input takes the two's-complement low bits
    p.set_big_integer(&BigInt::from(-122));
    assert_eq!(p.get(), 2);
    assert_eq!(p.get_big_integer(), BigInt::from(2));

    for v in -20i64..20 {
        let mut q = U2Pixel::prototype();
        q.set_big_integer(&BigInt::from(v));
        assert_eq!(q.get_big_integer(), BigInt::from(v.rem_euclid(4)), "v = {v}");
    }
}

#[test]
fn random_access_does_not_disturb_word_neighbors() {
    let img = ArrayImg::new(&U2Pixel::prototype(), &[64]).unwrap();
    let mut ra = img.random_access();

    // fill everything with 3, then zero one pixel in the middle of a word
    for x in 0..64 {
        ra.set_position(&[x]);
        ra.pixel_mut().set_value(3);
    }
    ra.set_position(&[17]);
    ra.pixel_mut().set_value(0);

    for x in 0..64 {
        ra.set_position(&[x]);
        let expected = if x == 17 { 0 } else { 3 };
        assert_eq!(ra.pixel().get(), expected, "x = {x}");
    }
}

#[test]
fn packed_views_extend_and_translate() {
    let img = ArrayImg::new(&U2Pixel::prototype(), &[4]).unwrap();
    let mut ra = img.random_access();
    for x in 0..4 {
        ra.set_position(&[x]);
        ra.pixel_mut().set_value(x as u64);
    }

    let padded = view::extend_border(view::translate(&img, &[100]));
    let mut vra = padded.random_access();
    vra.set_position(&[103]);
    assert_eq!(vra.pixel().get(), 3);
    vra.set_position(&[1000]);
    assert_eq!(vra.pixel().get(), 3); // clamped to the max border
    vra.set_position(&[-5]);
    assert_eq!(vra.pixel().get(), 0); // clamped to the min border
}
