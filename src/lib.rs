//! fixfmt – fixed-capacity, two-phase format-string encoder
//!
//! A template such as `"%s: %d (%x)"` is scanned once; the worst-case output
//! length is computed from the argument *kinds* alone, then the arguments are
//! rendered into a buffer of exactly that capacity. `%f` output always parses
//! back to the identical float.
//!
//! # Beispiel
//!
//! ```
//! use fixfmt::{estimate, format, render, Arg, ArgKind};
//!
//! // Einmalig: Groesse aus den Argument-Typen
//! let cap = estimate("A number: %d", &[ArgKind::Signed { bits: 32 }]).unwrap();
//! assert_eq!(cap, 10 + 11 + 1);
//!
//! let out = render("A number: %d", cap, &[Arg::from(42i32)]).unwrap();
//! assert_eq!(out, "A number: 42");
//! assert_eq!(out.len(), 12);
//!
//! // Beides in einem Aufruf
//! let out = format("%x / %f", &[Arg::from(-42i32), Arg::from(0.1f64)]).unwrap();
//! assert_eq!(out, "0xFFFFFFD6 / 0.1");
//! ```

pub mod argument;
pub mod buffer;
pub mod cache;
pub mod directive;
pub mod error;
pub mod estimate;
pub mod float;
pub mod format;
pub mod integer;
pub mod numeric;
pub mod options;
pub mod string;

pub use error::{Error, Result};

/// HashMap mit ahash, nur fuer interne Datenstrukturen.
pub(crate) type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

// Public API: Arguments
pub use argument::{Arg, ArgKind, StrArg, StrPolicy, kinds_of};

// Public API: Output
pub use buffer::FormattedBuffer;

// Public API: Options
pub use options::FormatOptions;

// Public API: Operations
pub use cache::FormatCache;
pub use directive::DirectiveKind;
pub use format::{
    CompiledFormat, compile, compile_with_options, estimate, estimate_with_options, format,
    format_with_options, render, render_with_options,
};
