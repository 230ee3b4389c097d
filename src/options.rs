//! Rendering options.
//!
//! # Beispiel
//!
//! ```
//! use fixfmt::FormatOptions;
//!
//! let opts = FormatOptions::default()
//!     .with_terminator(false)
//!     .with_min_float_digits(9);
//!
//! assert!(!opts.terminator());
//! assert_eq!(opts.min_float_digits(), 9);
//! assert!(opts.validate().is_ok());
//! ```

use crate::{Error, Result};

/// Default number of significant digits the `%f` encoder starts from.
pub const DEFAULT_MIN_FLOAT_DIGITS: u8 = 6;

/// Largest accepted `min_float_digits` (max_digits10 of the widest layout).
pub const MAX_FLOAT_DIGITS: u8 = 17;

/// Options shared by estimation and rendering.
///
/// The options influence the capacity (terminator slot), so a
/// [`CompiledFormat`](crate::CompiledFormat) keeps the options it was compiled
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    pub(crate) terminator: bool,
    pub(crate) min_float_digits: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            terminator: true,
            min_float_digits: DEFAULT_MIN_FLOAT_DIGITS,
        }
    }
}

impl FormatOptions {
    // --- Builder ---

    /// Reserviert (oder nicht) den Terminator-Slot am Ende des Buffers.
    pub fn with_terminator(mut self, terminator: bool) -> Self { self.terminator = terminator; self }
    /// Setzt die minimale Anzahl signifikanter Stellen fuer `%f`.
    pub fn with_min_float_digits(mut self, digits: u8) -> Self { self.min_float_digits = digits; self }

    // --- Getter ---

    /// Whether a terminator slot is reserved and written.
    pub fn terminator(&self) -> bool { self.terminator }
    /// Significant digits the float encoder starts from before widening.
    pub fn min_float_digits(&self) -> u8 { self.min_float_digits }

    /// Checks the option values.
    ///
    /// Returns [`Error::InvalidFloatDigits`] if `min_float_digits` is outside
    /// `1..=17`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FLOAT_DIGITS).contains(&self.min_float_digits) {
            return Err(Error::InvalidFloatDigits(self.min_float_digits));
        }
        Ok(())
    }

    /// Bytes reserved after the rendered text.
    pub(crate) fn terminator_slot(&self) -> usize {
        usize::from(self.terminator)
    }
}
