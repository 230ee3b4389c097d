//! Typed arguments and their kinds.
//!
//! Every [`Arg`] carries a value and reports an [`ArgKind`]. The kind is all
//! the size estimation looks at; two arguments of the same kind always have
//! the same worst-case output length.

use core::ffi::CStr;
use core::fmt;

/// How a string argument is copied into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrPolicy {
    /// Every declared byte is copied, embedded zero bytes included.
    #[default]
    CopyAll,
    /// Copying stops before the first zero byte.
    StopAtZero,
}

/// A string-like argument for `%s`.
///
/// The declared length of the byte sequence is its static bound: the output
/// never receives more bytes than that, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrArg<'a> {
    bytes: &'a [u8],
    policy: StrPolicy,
}

impl<'a> StrArg<'a> {
    /// A character sequence with a declared length and an explicit policy.
    pub fn chars(bytes: &'a [u8], policy: StrPolicy) -> Self {
        Self { bytes, policy }
    }

    /// A string view: exact length, always copied completely.
    pub fn view(s: &'a str) -> Self {
        Self::chars(s.as_bytes(), StrPolicy::CopyAll)
    }

    /// A bounded buffer: `buf.len()` is the maximum capacity, the content ends
    /// at the first zero byte.
    pub fn bounded(buf: &'a [u8]) -> Self {
        Self::chars(buf, StrPolicy::StopAtZero)
    }

    /// A NUL-terminated string. The bound includes the terminator.
    pub fn c_str(s: &'a CStr) -> Self {
        Self::chars(s.to_bytes_with_nul(), StrPolicy::StopAtZero)
    }

    /// Static bound: the declared length.
    pub fn bound(&self) -> usize {
        self.bytes.len()
    }

    pub fn policy(&self) -> StrPolicy {
        self.policy
    }

    /// The bytes `%s` emits for this argument.
    pub fn content(&self) -> &'a [u8] {
        match self.policy {
            StrPolicy::CopyAll => self.bytes,
            StrPolicy::StopAtZero => match self.bytes.iter().position(|&b| b == 0) {
                Some(end) => &self.bytes[..end],
                None => self.bytes,
            },
        }
    }
}

/// Static kind of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Signed integer of the given width in bits.
    Signed { bits: u32 },
    /// Unsigned integer of the given width in bits.
    Unsigned { bits: u32 },
    Bool,
    /// Floating point number of the given width in bits.
    Float { bits: u32 },
    /// A single character byte.
    Char,
    /// String-like argument with a static bound in bytes.
    Str { bound: usize },
}

impl ArgKind {
    /// Integer width in bits, `None` for non-integers. Booleans count as 1 bit.
    pub fn integer_bits(&self) -> Option<u32> {
        match *self {
            Self::Signed { bits } | Self::Unsigned { bits } => Some(bits),
            Self::Bool => Some(1),
            _ => None,
        }
    }

    /// Whether an argument of kind `supplied` can be rendered into a buffer
    /// sized for `self`.
    pub(crate) fn admits(&self, supplied: &ArgKind) -> bool {
        match (self, supplied) {
            (Self::Str { bound: compiled }, Self::Str { bound }) => bound <= compiled,
            _ => self == supplied,
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed { bits } => write!(f, "i{bits}"),
            Self::Unsigned { bits } => write!(f, "u{bits}"),
            Self::Bool => write!(f, "bool"),
            Self::Float { bits } => write!(f, "f{bits}"),
            Self::Char => write!(f, "char"),
            Self::Str { bound } => write!(f, "str[{bound}]"),
        }
    }
}

/// A typed argument, borrowed for a single render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Signed { value: i128, bits: u32 },
    Unsigned { value: u128, bits: u32 },
    Bool(bool),
    F32(f32),
    F64(f64),
    /// A single character byte, copied verbatim by `%c`.
    Char(u8),
    Str(StrArg<'a>),
}

impl Arg<'_> {
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Signed { bits, .. } => ArgKind::Signed { bits: *bits },
            Self::Unsigned { bits, .. } => ArgKind::Unsigned { bits: *bits },
            Self::Bool(_) => ArgKind::Bool,
            Self::F32(_) => ArgKind::Float { bits: 32 },
            Self::F64(_) => ArgKind::Float { bits: 64 },
            Self::Char(_) => ArgKind::Char,
            Self::Str(s) => ArgKind::Str { bound: s.bound() },
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg<'_> {
            fn from(value: $t) -> Self {
                Arg::Signed { value: i128::from(value), bits: <$t>::BITS }
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg<'_> {
            fn from(value: $t) -> Self {
                Arg::Unsigned { value: u128::from(value), bits: <$t>::BITS }
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        // isize passt auf allen unterstuetzten Plattformen in i128.
        Arg::Signed { value: value as i128, bits: isize::BITS }
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Arg::Unsigned { value: value as u128, bits: usize::BITS }
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::F32(value)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::F64(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(StrArg::view(value))
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(value: &'a CStr) -> Self {
        Arg::Str(StrArg::c_str(value))
    }
}

impl<'a> From<StrArg<'a>> for Arg<'a> {
    fn from(value: StrArg<'a>) -> Self {
        Arg::Str(value)
    }
}

/// Kinds of a whole argument list.
pub fn kinds_of(args: &[Arg<'_>]) -> Vec<ArgKind> {
    args.iter().map(Arg::kind).collect()
}
