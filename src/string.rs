//! String and character encoders for `%s` and `%c`.
//!
//! The copy policy is chosen by the caller when building the [`StrArg`]; the
//! encoder never looks at the bytes to decide how much to copy beyond what
//! the policy prescribes.

use crate::argument::StrArg;
use crate::buffer::OutputWriter;

/// `%s`: copies the argument's content, at most its declared bound.
pub fn format_str(w: &mut OutputWriter<'_>, value: &StrArg<'_>) {
    w.write_bytes(value.content());
}

/// `%c`: copies one character byte verbatim.
pub fn format_char(w: &mut OutputWriter<'_>, value: u8) {
    w.write_byte(value);
}
