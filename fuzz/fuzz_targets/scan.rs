#![no_main]
use fixfmt::{Arg, DirectiveKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(directives) = fixfmt::directive::scan(template) else {
        return;
    };

    // Ein passendes Argument pro Directive, Ergebnis muss in die Capacity passen.
    let args: Vec<Arg<'_>> = directives
        .iter()
        .map(|d| match d.kind {
            DirectiveKind::Decimal => Arg::from(i64::MIN),
            DirectiveKind::Hex => Arg::from(u128::MAX),
            DirectiveKind::Float => Arg::from(-f64::MIN_POSITIVE),
            DirectiveKind::Str => Arg::from(template),
            DirectiveKind::Char => Arg::Char(b'%'),
        })
        .collect();
    let out = fixfmt::format(template, &args).expect("scanned template must render");
    assert!(out.len() < out.capacity());
});
