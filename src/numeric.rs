//! Numeric primitives shared by the encoders.
//!
//! Integer helpers count digits and build powers of the output base. The float
//! helpers are self-contained series approximations of `ln`, `exp`, `log10`
//! and `floor`; the float encoder only needs them to *estimate* a decimal
//! exponent, which it then corrects with exact arithmetic.

use core::f64::consts::{LN_2, LN_10};

/// Terms of the atanh series used by [`ln`]. With `|z| <= 1/3` the error after
/// 24 terms is far below `f64::EPSILON`.
const LN_SERIES_TERMS: u32 = 24;

/// Terms of the Taylor series used by [`exp`] on `|r| <= ln(2)/2`.
const EXP_SERIES_TERMS: u32 = 24;

/// Number of decimal digits of `n`. Zero has one digit.
pub fn decimal_digits(mut n: u128) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Number of hexadecimal digits of `n`. Zero has one digit.
pub fn hex_digits(n: u128) -> usize {
    if n == 0 {
        1
    } else {
        (128 - n.leading_zeros() as usize).div_ceil(4)
    }
}

/// `10^p`. Panics on overflow in debug builds (p > 38).
pub fn pow10(p: usize) -> u128 {
    let mut a: u128 = 1;
    for _ in 0..p {
        a *= 10;
    }
    a
}

/// `16^p` for `p <= 31`.
pub fn pow16(p: usize) -> u128 {
    debug_assert!(p < 32, "16^{p} overflows u128");
    1u128 << (4 * p)
}

/// Largest value of a `bits`-wide unsigned integer (`bits` in `1..=128`).
pub fn unsigned_max(bits: u32) -> u128 {
    debug_assert!((1..=128).contains(&bits));
    u128::MAX >> (128 - bits)
}

/// Magnitude of the minimum of a `bits`-wide signed integer, `2^(bits-1)`.
pub fn signed_min_magnitude(bits: u32) -> u128 {
    debug_assert!((1..=128).contains(&bits));
    1u128 << (bits - 1)
}

/// Wraps `value` into a `bits`-wide two's-complement integer.
pub fn truncate_signed(value: i128, bits: u32) -> i128 {
    let shift = 128 - bits;
    (value << shift) >> shift
}

/// Wraps `value` into a `bits`-wide unsigned integer.
pub fn truncate_unsigned(value: u128, bits: u32) -> u128 {
    value & unsigned_max(bits)
}

/// Floor of `x` as an integer. Saturates outside the `i64` range.
pub fn floor(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) > x { t - 1 } else { t }
}

/// `ln(m)` for `m` in `[0.5, 1)` via `2·atanh((m-1)/(m+1))`.
fn ln_reduced(m: f64) -> f64 {
    let z = (m - 1.0) / (m + 1.0);
    let z2 = z * z;
    let mut power = z;
    let mut sum = 0.0;
    for k in 0..LN_SERIES_TERMS {
        sum += power / f64::from(2 * k + 1);
        power *= z2;
    }
    2.0 * sum
}

/// Natural logarithm of a positive finite `x`.
///
/// `x` is reduced to `m·2^e` with `m` in `[0.5, 1)`, the series result for `m`
/// gets one Halley correction step against [`exp`].
pub fn ln(x: f64) -> f64 {
    debug_assert!(x > 0.0 && x.is_finite(), "ln({x}) undefined");
    let mut m = x;
    let mut e: i32 = 0;
    while m >= 1.0 {
        m *= 0.5;
        e += 1;
    }
    while m < 0.5 {
        m *= 2.0;
        e -= 1;
    }
    let mut y = ln_reduced(m);
    let ey = exp(y);
    y += 2.0 * (m - ey) / (m + ey);
    f64::from(e) * LN_2 + y
}

/// `e^x`, by reduction to `2^n·e^r` with `|r| <= ln(2)/2`.
pub fn exp(x: f64) -> f64 {
    let n = floor(x / LN_2 + 0.5);
    let r = x - n as f64 * LN_2;

    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..EXP_SERIES_TERMS {
        term *= r / f64::from(k);
        sum += term;
    }

    // Skalierung mit 2^n; ueber-/unterlaeuft bei Bedarf nach inf bzw. 0.
    if n >= 0 {
        for _ in 0..n {
            sum *= 2.0;
            if sum.is_infinite() {
                break;
            }
        }
    } else {
        for _ in 0..(-n) {
            sum *= 0.5;
            if sum == 0.0 {
                break;
            }
        }
    }
    sum
}

/// Base-10 logarithm of a positive finite `x`.
pub fn log10(x: f64) -> f64 {
    ln(x) / LN_10
}

/// Estimates `floor(log10(v))` for `v = fraction · 2^binary_exponent` with
/// `fraction` in `[0.5, 1)`.
///
/// The result may be off by one near exact powers of ten; callers correct it.
pub fn estimate_exponent10(fraction: f64, binary_exponent: i32) -> i32 {
    let log10 = (f64::from(binary_exponent) * LN_2 + ln(fraction)) / LN_10;
    floor(log10) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_wraps_like_a_cast() {
        assert_eq!(truncate_signed(200, 8), i128::from(200u8 as i8));
        assert_eq!(truncate_signed(-1, 16), -1);
        assert_eq!(truncate_signed(i128::MIN, 128), i128::MIN);
        assert_eq!(truncate_unsigned(0x1FF, 8), 0xFF);
        assert_eq!(truncate_unsigned(u128::MAX, 128), u128::MAX);
    }

    #[test]
    fn decimal_digit_counts() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(u32::MAX as u128), 10);
        assert_eq!(decimal_digits(u64::MAX as u128), 20);
        assert_eq!(decimal_digits(u128::MAX), 39);
    }

    #[test]
    fn hex_digit_counts() {
        assert_eq!(hex_digits(0), 1);
        assert_eq!(hex_digits(0xF), 1);
        assert_eq!(hex_digits(0x10), 2);
        assert_eq!(hex_digits(0xFFFF_FFD6), 8);
        assert_eq!(hex_digits(u128::MAX), 32);
    }

    #[test]
    fn powers() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(3), 1000);
        assert_eq!(pow10(38), 10u128.pow(38));
        assert_eq!(pow16(0), 1);
        assert_eq!(pow16(2), 256);
        assert_eq!(pow16(31), 1u128 << 124);
    }

    #[test]
    fn integer_bounds() {
        assert_eq!(unsigned_max(8), 255);
        assert_eq!(unsigned_max(128), u128::MAX);
        assert_eq!(signed_min_magnitude(8), 128);
        assert_eq!(signed_min_magnitude(32), 2_147_483_648);
    }

    #[test]
    fn floor_handles_negatives() {
        assert_eq!(floor(2.5), 2);
        assert_eq!(floor(2.0), 2);
        assert_eq!(floor(-2.5), -3);
        assert_eq!(floor(-2.0), -2);
        assert_eq!(floor(-0.0), 0);
        assert_eq!(floor(0.999_999), 0);
    }

    #[test]
    fn ln_matches_std() {
        for &x in &[0.5, 0.75, 0.999, 1.0, 2.0, 10.0, 1e-300, 1e300, 5e-324, f64::MAX] {
            let ours = ln(x);
            let reference = x.ln();
            assert!(
                (ours - reference).abs() <= 1e-12 * reference.abs().max(1.0),
                "ln({x}) = {ours}, expected {reference}"
            );
        }
    }

    #[test]
    fn exp_matches_std() {
        for &x in &[-700.0, -10.0, -1.0, 0.0, 0.5, 1.0, 10.0, 700.0] {
            let ours = exp(x);
            let reference = x.exp();
            assert!(
                (ours - reference).abs() <= 1e-13 * reference,
                "exp({x}) = {ours}, expected {reference}"
            );
        }
        assert!(exp(1000.0).is_infinite());
        assert_eq!(exp(-1000.0), 0.0);
    }

    #[test]
    fn log10_of_powers_of_ten() {
        for p in -300..=300 {
            let x: f64 = format!("1e{p}").parse().unwrap();
            assert!((log10(x) - f64::from(p)).abs() < 1e-9, "log10(1e{p})");
        }
    }

    /// Schaetzung darf hoechstens um 1 danebenliegen.
    #[test]
    fn exponent_estimate_within_one() {
        for &v in &[1.0f64, 9.99, 10.0, 1000.0, 0.001, 1e-310, 1.7976931348623157e308, 123456.0] {
            let bits = v.to_bits();
            let exp_field = ((bits >> 52) & 0x7FF) as i32;
            let (fraction, binary_exponent) = if exp_field == 0 {
                // subnormal: v = m·2^-1074
                let m = bits & ((1 << 52) - 1);
                let len = 64 - m.leading_zeros() as i32;
                (m as f64 / (1u64 << len) as f64, len - 1074)
            } else {
                let m = (bits & ((1 << 52) - 1)) | (1 << 52);
                (m as f64 / (1u64 << 53) as f64, exp_field - 1022)
            };
            let estimate = estimate_exponent10(fraction, binary_exponent);
            let exact = v.log10().floor() as i32;
            assert!((estimate - exact).abs() <= 1, "{v}: estimate {estimate}, exact {exact}");
        }
    }
}
