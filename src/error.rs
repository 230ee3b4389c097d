//! Central error type for template scanning, size estimation and rendering.
//!
//! Every error is structural: it is raised while the template and the argument
//! kinds are validated, before a single output byte is written. Once rendering
//! starts, the encoders cannot fail.

use core::fmt;

use crate::argument::ArgKind;
use crate::directive::DirectiveKind;

/// All errors produced by `fixfmt`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A `%` is the last character of the template.
    DanglingMarker {
        /// Byte offset of the `%`.
        position: usize,
    },
    /// A `%` is followed by a character outside `{d, x, f, s, c}`.
    UnknownDirective {
        /// Byte offset of the `%`.
        position: usize,
        /// The character following the `%`.
        found: char,
    },
    /// Number of directives and number of supplied arguments differ.
    ArityMismatch { directives: usize, arguments: usize },
    /// The argument kind is not accepted by its directive.
    TypeMismatch {
        /// Zero-based argument index.
        index: usize,
        directive: DirectiveKind,
        argument: ArgKind,
    },
    /// No bit layout is known for a float of this width.
    UnsupportedFloatWidth(u32),
    /// Integer width outside `1..=128` bits.
    UnsupportedIntegerWidth(u32),
    /// The caller-supplied capacity cannot hold the worst-case output.
    CapacityExceeded { required: usize, capacity: usize },
    /// An argument does not match the kind a [`CompiledFormat`](crate::CompiledFormat)
    /// was compiled for.
    KindMismatch {
        /// Zero-based argument index.
        index: usize,
        compiled: ArgKind,
        supplied: ArgKind,
    },
    /// `min_float_digits` outside `1..=17`.
    InvalidFloatDigits(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingMarker { position } => {
                write!(f, "dangling '%' at end of template (offset {position})")
            }
            Self::UnknownDirective { position, found } => {
                write!(f, "unknown directive '%{}' at offset {position}", found.escape_debug())
            }
            Self::ArityMismatch { directives, arguments } => {
                if directives > arguments {
                    write!(f, "not enough arguments: template has {directives} directives, got {arguments} arguments")
                } else {
                    write!(f, "too many arguments: template has {directives} directives, got {arguments} arguments")
                }
            }
            Self::TypeMismatch { index, directive, argument } => {
                write!(f, "argument {index}: '%{}' does not accept {argument}", directive.as_char())
            }
            Self::UnsupportedFloatWidth(bits) => write!(f, "unsupported float width: {bits} bits"),
            Self::UnsupportedIntegerWidth(bits) => write!(f, "unsupported integer width: {bits} bits"),
            Self::CapacityExceeded { required, capacity } => {
                write!(f, "capacity {capacity} too small, worst case needs {required} bytes")
            }
            Self::KindMismatch { index, compiled, supplied } => {
                write!(f, "argument {index}: compiled for {compiled}, got {supplied}")
            }
            Self::InvalidFloatDigits(n) => {
                write!(f, "min_float_digits must be in 1..=17, got {n}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
