//! `%f` round-trip: the rendered text parses back to the identical bits.

use fixfmt::{Arg, ArgKind, FormatOptions, estimate, format, format_with_options};
use proptest::prelude::*;

fn f64_text(v: f64) -> String {
    format("%f", &[Arg::from(v)]).unwrap().to_string()
}

fn f32_text(v: f32) -> String {
    format("%f", &[Arg::from(v)]).unwrap().to_string()
}

fn assert_f64_round_trip(v: f64) {
    let text = f64_text(v);
    let parsed: f64 = text.parse().unwrap_or_else(|e| panic!("{text:?} for {v:e}: {e}"));
    assert_eq!(parsed.to_bits(), v.to_bits(), "{text} does not round-trip {v:e}");
    assert!(text.len() < estimate("%f", &[ArgKind::Float { bits: 64 }]).unwrap());
}

fn assert_f32_round_trip(v: f32) {
    let text = f32_text(v);
    let parsed: f32 = text.parse().unwrap_or_else(|e| panic!("{text:?} for {v:e}: {e}"));
    assert_eq!(parsed.to_bits(), v.to_bits(), "{text} does not round-trip {v:e}");
    assert!(text.len() < estimate("%f", &[ArgKind::Float { bits: 32 }]).unwrap());
}

#[test]
fn f64_extremes() {
    for v in [
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        1.0 + f64::EPSILON,
        0.1 + 0.2,
        1e22,
        1e23,
        9007199254740993.0,
    ] {
        assert_f64_round_trip(v);
    }
}

#[test]
fn f32_extremes() {
    for v in [f32::MAX, f32::MIN, f32::MIN_POSITIVE, f32::EPSILON, 0.1, 16777217.0, 3.4028235e38] {
        assert_f32_round_trip(v);
    }
}

/// Der Bereich um die Grenze normal/subnormal wird exakt gerechnet.
#[test]
fn subnormal_boundary() {
    let min_normal = f64::MIN_POSITIVE.to_bits();
    for bits in (min_normal - 64)..=(min_normal + 64) {
        assert_f64_round_trip(f64::from_bits(bits));
    }
    for bits in 1..=64u64 {
        assert_f64_round_trip(f64::from_bits(bits));
    }
    assert_f64_round_trip(f64::from_bits(0x000F_FFFF_FFFF_FFFF));

    let min_normal = f32::MIN_POSITIVE.to_bits();
    for bits in (min_normal - 64)..=(min_normal + 64) {
        assert_f32_round_trip(f32::from_bits(bits));
    }
    for bits in 1..=64u32 {
        assert_f32_round_trip(f32::from_bits(bits));
    }
}

#[test]
fn smallest_subnormals() {
    assert_eq!(f64_text(5e-324), "4.94066e-324");
    assert_eq!(f64_text(-5e-324), "-4.94066e-324");
    assert_eq!(f32_text(f32::from_bits(1)), "1.4013e-45");
}

#[test]
fn nan_and_infinity() {
    assert_eq!(f64_text(f64::NAN), "nan");
    assert_eq!(f64_text(-f64::NAN), "-nan");
    assert_eq!(f32_text(f32::NAN), "nan");
    assert_eq!(f64_text(f64::INFINITY), "inf");
    assert_eq!(f64_text(f64::NEG_INFINITY), "-inf");
    assert_eq!(f32_text(f32::INFINITY), "inf");
}

#[test]
fn every_min_digits_setting_round_trips() {
    for digits in 1..=17u8 {
        let opts = FormatOptions::default().with_min_float_digits(digits);
        for v in [0.1f64, 1.0 / 3.0, 123456.789, 6.02214076e23, 1e-300] {
            let out = format_with_options("%f", &[Arg::from(v)], &opts).unwrap();
            let parsed: f64 = out.as_str().unwrap().parse().unwrap();
            assert_eq!(parsed.to_bits(), v.to_bits(), "min_float_digits={digits}: {out}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn proptest_f64_round_trip(bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        prop_assume!(v.is_finite());
        assert_f64_round_trip(v);
    }

    #[test]
    fn proptest_f32_round_trip(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        prop_assume!(v.is_finite());
        assert_f32_round_trip(v);
    }

    #[test]
    fn proptest_f64_subnormal_round_trip(bits in 1u64..(1u64 << 52)) {
        assert_f64_round_trip(f64::from_bits(bits));
    }

    #[test]
    fn proptest_f32_subnormal_round_trip(bits in 1u32..(1u32 << 23)) {
        assert_f32_round_trip(f32::from_bits(bits));
    }
}
