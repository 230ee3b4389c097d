//! Worst-case output lengths per (directive, argument kind) pair.
//!
//! The length depends only on the kinds, never on a runtime value, so the
//! same template with the same kinds always needs the same capacity.

use crate::argument::ArgKind;
use crate::directive::DirectiveKind;
use crate::float::layout_for;
use crate::numeric::{decimal_digits, signed_min_magnitude, unsigned_max};
use crate::{Error, Result};

/// Largest supported integer width.
pub const MAX_INTEGER_BITS: u32 = 128;

/// `0x` prefix of `%x`.
const HEX_PREFIX_LEN: usize = 2;

/// Encoder selected for a (directive, argument kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    DecimalSigned { bits: u32 },
    DecimalUnsigned { bits: u32 },
    DecimalBool,
    Hex { bits: u32 },
    Float { bits: u32 },
    Str { bound: usize },
    Char,
}

impl Encoder {
    /// Selects the encoder for `directive` applied to an argument of `arg`.
    ///
    /// Returns `None` if the directive does not accept that kind.
    pub fn select(directive: DirectiveKind, arg: ArgKind) -> Option<Self> {
        use DirectiveKind as D;
        match (directive, arg) {
            (D::Decimal, ArgKind::Signed { bits }) => Some(Self::DecimalSigned { bits }),
            (D::Decimal, ArgKind::Unsigned { bits }) => Some(Self::DecimalUnsigned { bits }),
            (D::Decimal, ArgKind::Bool) => Some(Self::DecimalBool),
            (D::Hex, kind) => kind.integer_bits().map(|bits| Self::Hex { bits }),
            (D::Float, ArgKind::Float { bits }) => Some(Self::Float { bits }),
            (D::Str, ArgKind::Str { bound }) => Some(Self::Str { bound }),
            (D::Char, ArgKind::Char) => Some(Self::Char),
            _ => None,
        }
    }

    /// Worst-case byte length of this encoder's output.
    pub fn max_length(&self) -> Result<usize> {
        Ok(match *self {
            Self::DecimalSigned { bits } => {
                check_integer_bits(bits)?;
                decimal_digits(signed_min_magnitude(bits)) + 1
            }
            Self::DecimalUnsigned { bits } => {
                check_integer_bits(bits)?;
                decimal_digits(unsigned_max(bits))
            }
            Self::DecimalBool => 1,
            Self::Hex { bits } => {
                check_integer_bits(bits)?;
                HEX_PREFIX_LEN + bits.div_ceil(4) as usize
            }
            Self::Float { bits } => layout_for(bits)?.max_length(),
            Self::Str { bound } => bound,
            Self::Char => 1,
        })
    }
}

fn check_integer_bits(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_INTEGER_BITS {
        return Err(Error::UnsupportedIntegerWidth(bits));
    }
    Ok(())
}

/// Worst-case length of `directive` applied to an argument of kind `arg`.
///
/// The argument is reported as index 0 on a type mismatch; the driver uses
/// [`max_length_at`] to report the real position.
pub fn max_length(directive: DirectiveKind, arg: ArgKind) -> Result<usize> {
    max_length_at(0, directive, arg)
}

/// Like [`max_length`], for the argument at `index`.
pub fn max_length_at(index: usize, directive: DirectiveKind, arg: ArgKind) -> Result<usize> {
    Encoder::select(directive, arg)
        .ok_or(Error::TypeMismatch {
            index,
            directive,
            argument: arg,
        })?
        .max_length()
}
