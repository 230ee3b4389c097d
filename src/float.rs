//! Floating point encoder for `%f`.
//!
//! The value is taken apart bit by bit according to its [`FloatLayout`], the
//! decimal exponent is estimated with the series approximations from
//! [`numeric`](crate::numeric) and then corrected with exact big-integer
//! arithmetic. Digits are extracted from the exact fraction, so the subnormal
//! range needs no special treatment.
//!
//! Output starts at the configured number of significant digits (6 by
//! default) and widens, up to `max_digits10`, until the text parses back to
//! the identical bits:
//!
//! | value        | output         |
//! |--------------|----------------|
//! | `0.1`        | `0.1`          |
//! | `-0.0`       | `-0`           |
//! | `123456.0`   | `1.23456e+5`   |
//! | `1234.456789`| `1234.456789`  |
//! | `f64::NAN`   | `nan`          |

use log::trace;
use num_bigint::BigUint;

use crate::buffer::OutputWriter;
use crate::integer::write_unsigned;
use crate::numeric::{decimal_digits, estimate_exponent10};
use crate::{Error, Result};

/// Digits extracted per value: `max_digits10 + 1` of the widest layout.
const MAX_EXTRACTED_DIGITS: usize = 18;

/// Scratch space for one rendering attempt, larger than any `%f` MaxLength.
const SCRATCH_LEN: usize = 32;

/// Decimal exponents rendered without an exponent suffix.
const POSITIONAL_EXPONENTS: core::ops::RangeInclusive<i32> = -4..=4;

/// Bit layout of a binary floating point format.
#[derive(Debug)]
pub struct FloatLayout {
    pub bits: u32,
    /// Stored fraction bits (without the implicit leading one).
    pub mantissa_bits: u32,
    pub exponent_bits: u32,
    /// Significant decimal digits that always round-trip.
    pub max_digits10: usize,
    /// Largest decimal exponent of a finite value.
    pub max_exponent10: u32,
    /// Parses decimal text back into raw bits.
    parse: fn(&str) -> Option<u64>,
}

fn parse_f32(s: &str) -> Option<u64> {
    s.parse::<f32>().ok().map(|v| u64::from(v.to_bits()))
}

fn parse_f64(s: &str) -> Option<u64> {
    s.parse::<f64>().ok().map(f64::to_bits)
}

/// IEEE 754 binary32.
pub static F32_LAYOUT: FloatLayout = FloatLayout {
    bits: 32,
    mantissa_bits: 23,
    exponent_bits: 8,
    max_digits10: 9,
    max_exponent10: 38,
    parse: parse_f32,
};

/// IEEE 754 binary64.
pub static F64_LAYOUT: FloatLayout = FloatLayout {
    bits: 64,
    mantissa_bits: 52,
    exponent_bits: 11,
    max_digits10: 17,
    max_exponent10: 308,
    parse: parse_f64,
};

/// Selects the layout for a float of `bits` width.
///
/// Returns [`Error::UnsupportedFloatWidth`] for anything but 32 and 64 bits.
pub fn layout_for(bits: u32) -> Result<&'static FloatLayout> {
    match bits {
        32 => Ok(&F32_LAYOUT),
        64 => Ok(&F64_LAYOUT),
        _ => Err(Error::UnsupportedFloatWidth(bits)),
    }
}

/// Classification of a raw float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatClass {
    Nan,
    Infinite,
    Zero,
    /// `|value| = mantissa · 2^exponent`.
    Finite { mantissa: u64, exponent: i32 },
}

impl FloatLayout {
    fn bias(&self) -> i32 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    fn sign_mask(&self) -> u64 {
        1u64 << (self.bits - 1)
    }

    /// Worst-case `%f` output: sign, point, `max_digits10` digits, `e`,
    /// exponent sign and the exponent digits.
    pub fn max_length(&self) -> usize {
        1 + 1 + self.max_digits10 + 1 + 1 + decimal_digits(u128::from(self.max_exponent10))
    }

    /// Sign bit of `raw`. Set for `-0.0` and negative NaNs as well.
    pub fn is_negative(&self, raw: u64) -> bool {
        raw & self.sign_mask() != 0
    }

    /// Splits `raw` into its class and, for finite non-zero values, an
    /// integer mantissa and binary exponent.
    pub fn classify(&self, raw: u64) -> FloatClass {
        let fraction_mask = (1u64 << self.mantissa_bits) - 1;
        let exponent_mask = (1u64 << self.exponent_bits) - 1;
        let fraction = raw & fraction_mask;
        let exponent_field = (raw >> self.mantissa_bits) & exponent_mask;
        let shift = self.bias() + self.mantissa_bits as i32;

        if exponent_field == exponent_mask {
            return if fraction == 0 { FloatClass::Infinite } else { FloatClass::Nan };
        }
        if exponent_field == 0 {
            if fraction == 0 {
                return FloatClass::Zero;
            }
            // Subnormal: kein implizites Eins-Bit, Exponent fest auf 1 - bias.
            return FloatClass::Finite { mantissa: fraction, exponent: 1 - shift };
        }
        FloatClass::Finite {
            mantissa: fraction | (1u64 << self.mantissa_bits),
            exponent: exponent_field as i32 - shift,
        }
    }
}

/// Exact leading decimal digits of a finite value.
#[derive(Debug)]
struct Digits {
    digits: [u8; MAX_EXTRACTED_DIGITS],
    count: usize,
    /// Nonzero remainder after the last extracted digit.
    sticky: bool,
    /// Decimal exponent of the first digit.
    exponent: i32,
}

/// A rounded decimal: `d.ddd × 10^exponent`, trailing zeros stripped.
#[derive(Debug, PartialEq, Eq)]
struct Decimal {
    digits: [u8; MAX_EXTRACTED_DIGITS],
    len: usize,
    exponent: i32,
}

/// Extracts `count` digits of `mantissa · 2^exponent`, starting from the
/// estimated decimal exponent `estimate`.
fn extract_digits(mantissa: u64, exponent: i32, estimate: i32, count: usize) -> Digits {
    debug_assert!(count <= MAX_EXTRACTED_DIGITS);
    let one = BigUint::from(1u32);
    let (mut num, mut den) = if exponent >= 0 {
        (BigUint::from(mantissa) << exponent as usize, one)
    } else {
        (BigUint::from(mantissa), one << exponent.unsigned_abs() as usize)
    };

    // value / 10^k als exakter Bruch num/den.
    let ten = BigUint::from(10u32);
    let mut k = estimate;
    if k >= 0 {
        den *= ten.pow(k.unsigned_abs());
    } else {
        num *= ten.pow(k.unsigned_abs());
    }

    // Schaetzung korrigieren, bis genau eine Ziffer vor dem Komma steht.
    while num >= &den * 10u32 {
        den *= 10u32;
        k += 1;
    }
    while num < den {
        num *= 10u32;
        k -= 1;
    }

    let mut digits = [0u8; MAX_EXTRACTED_DIGITS];
    for slot in digits.iter_mut().take(count) {
        let mut d = 0u8;
        while num >= den {
            num -= &den;
            d += 1;
        }
        *slot = d;
        num *= 10u32;
    }

    Digits {
        digits,
        count,
        sticky: num.bits() != 0,
        exponent: k,
    }
}

impl Digits {
    /// Rounds to `precision` significant digits, half to even.
    fn round_to(&self, precision: usize) -> Decimal {
        debug_assert!(precision >= 1 && precision < self.count);
        let mut out = [0u8; MAX_EXTRACTED_DIGITS];
        out[..precision].copy_from_slice(&self.digits[..precision]);
        let mut exponent = self.exponent;

        let next = self.digits[precision];
        let rest_nonzero = self.sticky || self.digits[precision + 1..self.count].iter().any(|&d| d != 0);
        let round_up = next > 5 || (next == 5 && (rest_nonzero || out[precision - 1] % 2 == 1));

        if round_up {
            let mut i = precision;
            loop {
                if i == 0 {
                    // Uebertrag aus der fuehrenden Ziffer: 9.99..9 -> 10.00..0
                    out[0] = 1;
                    exponent += 1;
                    break;
                }
                i -= 1;
                if out[i] == 9 {
                    out[i] = 0;
                } else {
                    out[i] += 1;
                    break;
                }
            }
        }

        let mut len = precision;
        while len > 1 && out[len - 1] == 0 {
            len -= 1;
        }
        Decimal { digits: out, len, exponent }
    }
}

fn write_digits(w: &mut OutputWriter<'_>, digits: &[u8]) {
    for &d in digits {
        w.write_byte(b'0' + d);
    }
}

/// Writes an unsigned decimal in positional or scientific notation.
fn write_decimal(w: &mut OutputWriter<'_>, decimal: &Decimal) {
    let digits = &decimal.digits[..decimal.len];
    let exponent = decimal.exponent;

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        if exponent >= 0 {
            let integer_len = exponent as usize + 1;
            if digits.len() <= integer_len {
                write_digits(w, digits);
                w.write_repeated(b'0', integer_len - digits.len());
            } else {
                write_digits(w, &digits[..integer_len]);
                w.write_byte(b'.');
                write_digits(w, &digits[integer_len..]);
            }
        } else {
            w.write_bytes(b"0.");
            w.write_repeated(b'0', exponent.unsigned_abs() as usize - 1);
            write_digits(w, digits);
        }
    } else {
        write_digits(w, &digits[..1]);
        if digits.len() > 1 {
            w.write_byte(b'.');
            write_digits(w, &digits[1..]);
        }
        w.write_byte(b'e');
        w.write_byte(if exponent < 0 { b'-' } else { b'+' });
        write_unsigned(w, u128::from(exponent.unsigned_abs()));
    }
}

/// `%f`: writes the raw float `raw` of the given layout.
///
/// `min_digits` is the number of significant digits to start from; it is
/// clamped to `1..=max_digits10`.
pub fn format_float(w: &mut OutputWriter<'_>, raw: u64, layout: &FloatLayout, min_digits: usize) {
    if layout.is_negative(raw) {
        w.write_byte(b'-');
    }

    let (mantissa, exponent) = match layout.classify(raw) {
        FloatClass::Nan => return w.write_bytes(b"nan"),
        FloatClass::Infinite => return w.write_bytes(b"inf"),
        FloatClass::Zero => return w.write_byte(b'0'),
        FloatClass::Finite { mantissa, exponent } => (mantissa, exponent),
    };

    // |v| = fraction · 2^binary_exponent mit fraction in [0.5, 1)
    let mantissa_len = 64 - mantissa.leading_zeros();
    let fraction = mantissa as f64 / (1u64 << mantissa_len) as f64;
    let estimate = estimate_exponent10(fraction, exponent + mantissa_len as i32);
    let digits = extract_digits(mantissa, exponent, estimate, layout.max_digits10 + 1);

    let magnitude = raw & !layout.sign_mask();
    let start = min_digits.clamp(1, layout.max_digits10);
    let mut scratch = [0u8; SCRATCH_LEN];

    for precision in start..=layout.max_digits10 {
        let decimal = digits.round_to(precision);
        let mut attempt = OutputWriter::new(&mut scratch);
        write_decimal(&mut attempt, &decimal);
        let text = attempt.written();

        let round_trips = core::str::from_utf8(text)
            .ok()
            .and_then(|s| (layout.parse)(s))
            == Some(magnitude);
        if round_trips || precision == layout.max_digits10 {
            if precision > start {
                trace!("f{} {raw:#x} needs {precision} significant digits to round-trip", layout.bits);
            }
            w.write_bytes(text);
            return;
        }
    }
}
