//! Directive scanner.
//!
//! A template is plain UTF-8 text in which `%` introduces a directive. The
//! character right after the `%` selects the conversion; there is no width,
//! precision, flag or positional syntax.

use core::fmt;

use crate::{Error, Result};

/// Marker byte introducing a directive.
pub const MARKER: u8 = b'%';

/// Length in bytes of a directive (`%` plus the kind character).
pub const DIRECTIVE_LEN: usize = 2;

/// Conversion selected by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `%d`: decimal integer or boolean.
    Decimal,
    /// `%x`: `0x`-prefixed uppercase hexadecimal integer or boolean.
    Hex,
    /// `%f`: round-trip-safe floating point.
    Float,
    /// `%s`: string-like argument.
    Str,
    /// `%c`: a single character byte.
    Char,
}

impl DirectiveKind {
    /// Maps the character following `%` to a kind.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'd' => Some(Self::Decimal),
            b'x' => Some(Self::Hex),
            b'f' => Some(Self::Float),
            b's' => Some(Self::Str),
            b'c' => Some(Self::Char),
            _ => None,
        }
    }

    /// The directive character, without the `%`.
    pub fn as_char(self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Hex => 'x',
            Self::Float => 'f',
            Self::Str => 's',
            Self::Char => 'c',
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.as_char())
    }
}

/// A directive found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Byte offset of the `%` in the template.
    pub position: usize,
}

impl Directive {
    /// Byte offset right after the directive.
    pub fn end(&self) -> usize {
        self.position + DIRECTIVE_LEN
    }
}

/// Scans `template` and returns its directives in order.
///
/// Returns [`Error::DanglingMarker`] if the template ends right after a `%`,
/// and [`Error::UnknownDirective`] if a `%` is followed by anything other than
/// `d`, `x`, `f`, `s` or `c` (including another `%`).
pub fn scan(template: &str) -> Result<Vec<Directive>> {
    let bytes = template.as_bytes();
    let mut directives = Vec::new();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == MARKER) {
        let position = pos + offset;
        let Some(&next) = bytes.get(position + 1) else {
            return Err(Error::DanglingMarker { position });
        };
        let Some(kind) = DirectiveKind::from_byte(next) else {
            // `%` ist ASCII, also beginnt bei position + 1 ein gueltiges Zeichen.
            let found = template[position + 1..].chars().next().unwrap_or('\u{FFFD}');
            return Err(Error::UnknownDirective { position, found });
        };
        directives.push(Directive { kind, position });
        pos = position + DIRECTIVE_LEN;
    }

    Ok(directives)
}

/// Checks that the template has exactly one directive per argument.
pub fn check_arity(directives: &[Directive], arguments: usize) -> Result<()> {
    if directives.len() != arguments {
        return Err(Error::ArityMismatch {
            directives: directives.len(),
            arguments,
        });
    }
    Ok(())
}
