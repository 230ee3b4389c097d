//! End-to-end rendering through the public API.

use std::ffi::CStr;

use fixfmt::{Arg, ArgKind, FormatOptions, StrArg, StrPolicy, estimate, format, render};

fn text(template: &str, args: &[Arg<'_>]) -> String {
    format(template, args).unwrap().to_string()
}

#[test]
fn decimal_number() {
    let cap = estimate("A number: %d", &[ArgKind::Signed { bits: 32 }]).unwrap();
    let out = render("A number: %d", cap, &[Arg::from(42i32)]).unwrap();
    assert_eq!(out, "A number: 42");
    assert_eq!(out.len(), 12);
    assert_eq!(out.capacity(), cap);
}

#[test]
fn hex_number() {
    assert_eq!(text("A hex number: %x", &[Arg::from(42i32)]), "A hex number: 0x2A");
    assert_eq!(text("A hex number: %x", &[Arg::from(-42i32)]), "A hex number: 0xFFFFFFD6");
    assert_eq!(text("%x", &[Arg::from(0u64)]), "0x0");
    assert_eq!(text("%x", &[Arg::from(-1i8)]), "0xFF");
    assert_eq!(text("%x", &[Arg::from(u128::MAX)]), format!("0x{}", "F".repeat(32)));
}

#[test]
fn booleans() {
    assert_eq!(text("%d", &[Arg::from(true)]), "1");
    assert_eq!(text("%d", &[Arg::from(false)]), "0");
    assert_eq!(text("%x", &[Arg::from(false)]), "0x0");
    assert_eq!(text("%x", &[Arg::from(true)]), "0x1");
}

#[test]
fn strings() {
    assert_eq!(text("%s world", &[Arg::from("hello")]), "hello world");
    assert_eq!(text("%s world", &[Arg::from("")]), " world");
}

#[test]
fn string_with_embedded_zero_is_copied() {
    let out = format("[%s]", &[Arg::from("a\0b")]).unwrap();
    assert_eq!(out.as_bytes(), b"[a\0b]");
    assert_eq!(out.len(), 5);
}

#[test]
fn stop_at_zero_sequence() {
    let out = format("%s!", &[Arg::Str(StrArg::chars(b"hello\0", StrPolicy::StopAtZero))]).unwrap();
    assert_eq!(out, "hello!");
    // Die Capacity richtet sich nach der deklarierten Laenge, nicht nach dem Inhalt.
    assert_eq!(out.capacity(), 6 + 1 + 1);
}

#[test]
fn c_string_argument() {
    let name: &CStr = c"fixfmt";
    let out = format("name=%s", &[Arg::from(name)]).unwrap();
    assert_eq!(out, "name=fixfmt");
    assert_eq!(out.as_c_str(), Some(c"name=fixfmt"));
}

#[test]
fn floats() {
    assert_eq!(text("%f", &[Arg::from(0.0f64)]), "0");
    assert_eq!(text("%f", &[Arg::from(-0.0f64)]), "-0");
    assert_eq!(text("%f", &[Arg::from(f64::NAN)]), "nan");
    assert_eq!(text("%f", &[Arg::from(f64::INFINITY)]), "inf");
    assert_eq!(text("%f", &[Arg::from(f64::NEG_INFINITY)]), "-inf");
    assert_eq!(text("pi ~ %f", &[Arg::from(3.25f32)]), "pi ~ 3.25");
}

#[test]
fn chars() {
    assert_eq!(text("%c%c%c", &[Arg::Char(b'a'), Arg::Char(b'b'), Arg::Char(b'c')]), "abc");
}

#[test]
fn integer_extremes() {
    assert_eq!(text("%d", &[Arg::from(i8::MIN)]), "-128");
    assert_eq!(text("%d", &[Arg::from(i64::MIN)]), "-9223372036854775808");
    assert_eq!(text("%d", &[Arg::from(u64::MAX)]), "18446744073709551615");
    assert_eq!(text("%d", &[Arg::from(i128::MIN)]), "-170141183460469231731687303715884105728");
}

#[test]
fn empty_template_has_zero_length() {
    let out = format("", &[]).unwrap();
    assert_eq!(out.len(), 0);
    assert!(out.is_empty());
    assert_eq!(out.as_c_str(), Some(c""));
}

#[test]
fn mixed_template() {
    let out = format(
        "%s #%d: %f (%x) %c",
        &[
            Arg::from("item"),
            Arg::from(7u16),
            Arg::from(1.5f64),
            Arg::from(255u8),
            Arg::Char(b'!'),
        ],
    )
    .unwrap();
    assert_eq!(out, "item #7: 1.5 (0xFF) !");
    assert!(out.len() < out.capacity());
}

#[test]
fn effective_length_never_exceeds_capacity() {
    let kinds = [ArgKind::Signed { bits: 64 }, ArgKind::Float { bits: 64 }];
    let cap = estimate("%d|%f", &kinds).unwrap();
    for (i, f) in [(i64::MIN, -f64::MIN_POSITIVE), (0, 0.0), (i64::MAX, f64::MAX)] {
        let out = render("%d|%f", cap, &[Arg::from(i), Arg::from(f)]).unwrap();
        assert!(out.len() < cap);
        assert!(out.is_terminated());
    }
}

#[test]
fn without_terminator() {
    let opts = FormatOptions::default().with_terminator(false);
    let out = fixfmt::format_with_options("%d", &[Arg::from(100u8)], &opts).unwrap();
    assert_eq!(out, "100");
    assert_eq!(out.capacity(), 3);
    assert!(!out.is_terminated());
}

#[test]
fn non_ascii_literals_survive() {
    assert_eq!(text("Größe: %d €", &[Arg::from(3u8)]), "Größe: 3 €");
}
