#![no_main]
use fixfmt::Arg;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bits: u64| {
    let v = f64::from_bits(bits);
    let out = fixfmt::format("%f", &[Arg::from(v)]).expect("%f accepts f64");
    let text = out.as_str().expect("float output is ASCII");
    if v.is_nan() {
        assert!(text.ends_with("nan"));
        return;
    }
    let parsed: f64 = text.parse().expect("float output parses");
    assert_eq!(parsed.to_bits(), bits);

    let narrow = f32::from_bits(bits as u32);
    if narrow.is_finite() {
        let out = fixfmt::format("%f", &[Arg::from(narrow)]).expect("%f accepts f32");
        let parsed: f32 = out.as_str().expect("ascii").parse().expect("float output parses");
        assert_eq!(parsed.to_bits(), narrow.to_bits());
    }
});
