//! Two-phase driver.
//!
//! Phase 1 walks the template and sums literal spans and the worst-case
//! length of every directive; Phase 2 walks it again and runs the encoders
//! into a buffer of exactly that capacity. Everything that can fail happens
//! in Phase 1.
//!
//! # Beispiel
//!
//! ```
//! use fixfmt::{compile, Arg, ArgKind};
//!
//! let compiled = compile("%d items at %f", &[ArgKind::Unsigned { bits: 32 }, ArgKind::Float { bits: 64 }]).unwrap();
//! assert_eq!(compiled.capacity(), 10 + 10 + 24 + 1);
//!
//! let out = compiled.render(&[Arg::from(3u32), Arg::from(0.5)]).unwrap();
//! assert_eq!(out, "3 items at 0.5");
//! ```

use log::debug;

use crate::argument::{Arg, ArgKind, kinds_of};
use crate::buffer::{FormattedBuffer, OutputWriter};
use crate::directive::{Directive, DirectiveKind, check_arity, scan};
use crate::estimate::max_length_at;
use crate::float::{F32_LAYOUT, F64_LAYOUT, format_float};
use crate::integer::{
    format_decimal_bool, format_decimal_signed, format_decimal_unsigned, format_hex_bool,
    format_hex_signed, format_hex_unsigned,
};
use crate::numeric::{truncate_signed, truncate_unsigned};
use crate::options::FormatOptions;
use crate::string::{format_char, format_str};
use crate::{Error, Result};

/// A template validated and sized for fixed argument kinds.
///
/// Rendering a `CompiledFormat` skips Phase 1 entirely. It is immutable and
/// can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    template: Box<str>,
    directives: Vec<Directive>,
    kinds: Vec<ArgKind>,
    capacity: usize,
    options: FormatOptions,
}

impl CompiledFormat {
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Directives of the template, in order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Argument kinds this format was compiled for.
    pub fn kinds(&self) -> &[ArgKind] {
        &self.kinds
    }

    /// Buffer capacity of every render, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Renders `args` into a new buffer.
    ///
    /// Every argument must have the kind it was compiled for; a string may
    /// have a smaller bound. Otherwise [`Error::KindMismatch`] (or
    /// [`Error::ArityMismatch`] for a wrong argument count) is returned.
    pub fn render(&self, args: &[Arg<'_>]) -> Result<FormattedBuffer> {
        check_arity(&self.directives, args.len())?;
        for (index, (compiled, arg)) in self.kinds.iter().zip(args).enumerate() {
            let supplied = arg.kind();
            if !compiled.admits(&supplied) {
                return Err(Error::KindMismatch {
                    index,
                    compiled: *compiled,
                    supplied,
                });
            }
        }
        Ok(write_all(
            &self.template,
            &self.directives,
            args,
            self.capacity,
            &self.options,
        ))
    }
}

// ============================================================================
// Phase 1
// ============================================================================

/// Worst-case length of the rendered text, without the terminator slot.
fn body_length(template: &str, directives: &[Directive], kinds: &[ArgKind]) -> Result<usize> {
    let mut total = 0;
    let mut literal_start = 0;
    for (index, (directive, kind)) in directives.iter().zip(kinds).enumerate() {
        total += directive.position - literal_start;
        total += max_length_at(index, directive.kind, *kind)?;
        literal_start = directive.end();
    }
    Ok(total + template.len() - literal_start)
}

/// Scans `template`, checks the kinds and returns the directives with the
/// body length.
fn plan(template: &str, kinds: &[ArgKind], options: &FormatOptions) -> Result<(Vec<Directive>, usize)> {
    options.validate()?;
    let directives = scan(template)?;
    check_arity(&directives, kinds.len())?;
    let body = body_length(template, &directives, kinds)?;
    Ok((directives, body))
}

// ============================================================================
// Phase 2
// ============================================================================

fn write_argument(w: &mut OutputWriter<'_>, kind: DirectiveKind, arg: &Arg<'_>, options: &FormatOptions) {
    use DirectiveKind as D;
    match (kind, *arg) {
        (D::Decimal, Arg::Signed { value, bits }) => format_decimal_signed(w, truncate_signed(value, bits)),
        (D::Decimal, Arg::Unsigned { value, bits }) => {
            format_decimal_unsigned(w, truncate_unsigned(value, bits))
        }
        (D::Decimal, Arg::Bool(value)) => format_decimal_bool(w, value),
        (D::Hex, Arg::Signed { value, bits }) => format_hex_signed(w, value, bits),
        (D::Hex, Arg::Unsigned { value, bits }) => format_hex_unsigned(w, value, bits),
        (D::Hex, Arg::Bool(value)) => format_hex_bool(w, value),
        (D::Float, Arg::F32(value)) => format_float(
            w,
            u64::from(value.to_bits()),
            &F32_LAYOUT,
            usize::from(options.min_float_digits),
        ),
        (D::Float, Arg::F64(value)) => {
            format_float(w, value.to_bits(), &F64_LAYOUT, usize::from(options.min_float_digits))
        }
        (D::Str, Arg::Str(value)) => format_str(w, &value),
        (D::Char, Arg::Char(value)) => format_char(w, value),
        (kind, arg) => unreachable!("{kind} with {} passed the kind check", arg.kind()),
    }
}

/// Copies literal spans and runs the encoders. Kinds and capacity must
/// already be checked.
fn write_all(
    template: &str,
    directives: &[Directive],
    args: &[Arg<'_>],
    capacity: usize,
    options: &FormatOptions,
) -> FormattedBuffer {
    let bytes = template.as_bytes();
    let mut data = vec![0u8; capacity].into_boxed_slice();
    let mut w = OutputWriter::new(&mut data);

    let mut literal_start = 0;
    for (directive, arg) in directives.iter().zip(args) {
        w.write_bytes(&bytes[literal_start..directive.position]);
        write_argument(&mut w, directive.kind, arg, options);
        literal_start = directive.end();
    }
    w.write_bytes(&bytes[literal_start..]);

    let len = w.position();
    // Der Slot existiert nur, wenn Capacity uebrig ist; der Buffer ist schon genullt.
    let terminated = options.terminator && len < capacity;
    if terminated {
        w.write_byte(0);
    }
    FormattedBuffer::new(data, len, terminated)
}

// ============================================================================
// High-Level API
// ============================================================================

/// Capacity needed to render `template` with arguments of the given kinds.
///
/// Includes the terminator slot.
pub fn estimate(template: &str, kinds: &[ArgKind]) -> Result<usize> {
    estimate_with_options(template, kinds, &FormatOptions::default())
}

/// [`estimate`] with explicit options.
pub fn estimate_with_options(template: &str, kinds: &[ArgKind], options: &FormatOptions) -> Result<usize> {
    let (_, body) = plan(template, kinds, options)?;
    Ok(body + options.terminator_slot())
}

/// Validates and sizes `template` once for the given argument kinds.
pub fn compile(template: &str, kinds: &[ArgKind]) -> Result<CompiledFormat> {
    compile_with_options(template, kinds, &FormatOptions::default())
}

/// [`compile`] with explicit options.
pub fn compile_with_options(
    template: &str,
    kinds: &[ArgKind],
    options: &FormatOptions,
) -> Result<CompiledFormat> {
    let (directives, body) = plan(template, kinds, options)?;
    let capacity = body + options.terminator_slot();
    debug!(
        "compiled {template:?}: {} directives, capacity {capacity}",
        directives.len()
    );
    Ok(CompiledFormat {
        template: template.into(),
        directives,
        kinds: kinds.to_vec(),
        capacity,
        options: *options,
    })
}

/// Renders `args` into a buffer of `capacity` bytes.
///
/// Fails with [`Error::CapacityExceeded`] if `capacity` cannot hold the
/// worst-case text. The terminator is written only if a byte is left after
/// the text.
pub fn render(template: &str, capacity: usize, args: &[Arg<'_>]) -> Result<FormattedBuffer> {
    render_with_options(template, capacity, args, &FormatOptions::default())
}

/// [`render`] with explicit options.
pub fn render_with_options(
    template: &str,
    capacity: usize,
    args: &[Arg<'_>],
    options: &FormatOptions,
) -> Result<FormattedBuffer> {
    let (directives, body) = plan(template, &kinds_of(args), options)?;
    if capacity < body {
        return Err(Error::CapacityExceeded { required: body, capacity });
    }
    Ok(write_all(template, &directives, args, capacity, options))
}

/// Estimates and renders in one call, with the capacity taken from the
/// argument kinds.
pub fn format(template: &str, args: &[Arg<'_>]) -> Result<FormattedBuffer> {
    format_with_options(template, args, &FormatOptions::default())
}

/// [`format`] with explicit options.
pub fn format_with_options(template: &str, args: &[Arg<'_>], options: &FormatOptions) -> Result<FormattedBuffer> {
    let (directives, body) = plan(template, &kinds_of(args), options)?;
    let capacity = body + options.terminator_slot();
    Ok(write_all(template, &directives, args, capacity, options))
}
