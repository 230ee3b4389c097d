//! Integer encoders for `%d` and `%x`.
//!
//! Both write the most significant digit first, dividing by the largest power
//! of the base that fits. Signed values are handled on their unsigned
//! counterpart so the minimum of every width renders without overflow.

use crate::buffer::OutputWriter;
use crate::numeric::{decimal_digits, hex_digits, pow10, pow16, unsigned_max};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Writes `value` in decimal, without sign.
pub fn write_unsigned(w: &mut OutputWriter<'_>, value: u128) {
    let digits = decimal_digits(value);
    let mut divisor = pow10(digits - 1);
    let mut rest = value;
    for _ in 0..digits {
        w.write_byte(b'0' + (rest / divisor) as u8);
        rest %= divisor;
        divisor /= 10;
    }
}

/// `%d` for a signed integer.
pub fn format_decimal_signed(w: &mut OutputWriter<'_>, value: i128) {
    if value < 0 {
        w.write_byte(b'-');
        // Erst nach u128 wandeln, dann negieren: i128::MIN hat kein positives Gegenstueck.
        write_unsigned(w, (value as u128).wrapping_neg());
    } else {
        write_unsigned(w, value as u128);
    }
}

/// `%d` for an unsigned integer.
pub fn format_decimal_unsigned(w: &mut OutputWriter<'_>, value: u128) {
    write_unsigned(w, value);
}

/// `%d` for a boolean: a single `0` or `1`.
pub fn format_decimal_bool(w: &mut OutputWriter<'_>, value: bool) {
    w.write_byte(if value { b'1' } else { b'0' });
}

/// Writes the `0x` prefix and the uppercase hex digits of `pattern`.
fn write_hex(w: &mut OutputWriter<'_>, pattern: u128) {
    w.write_bytes(b"0x");
    let digits = hex_digits(pattern);
    for i in (0..digits).rev() {
        let nibble = (pattern / pow16(i)) & 0xF;
        w.write_byte(HEX_DIGITS[nibble as usize]);
    }
}

/// `%x` for a signed integer of `bits` width: the two's-complement pattern.
///
/// `-42` as a 32-bit value renders `0xFFFFFFD6`.
pub fn format_hex_signed(w: &mut OutputWriter<'_>, value: i128, bits: u32) {
    write_hex(w, value as u128 & unsigned_max(bits));
}

/// `%x` for an unsigned integer of `bits` width.
pub fn format_hex_unsigned(w: &mut OutputWriter<'_>, value: u128, bits: u32) {
    write_hex(w, value & unsigned_max(bits));
}

/// `%x` for a boolean: `0x0` or `0x1`.
pub fn format_hex_bool(w: &mut OutputWriter<'_>, value: bool) {
    write_hex(w, u128::from(value));
}
