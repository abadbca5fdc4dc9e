//! # Truncated Decimal Rendering
//!
//! Human-readable output for the rotation types. Values are cut, never
//! rounded, to a fixed number of fractional digits, so that
//! `1.999999996` shown with 8 digits reads `1.99999999` rather than `2`.
//!
//! Every value type implements [`std::fmt::Display`] and honours the
//! formatter precision as the digit count (`format!("{:.3}", q)`). When
//! the precision should travel with the value instead, wrap it with
//! [`TruncatedDisplay::truncated`].
//!
//! ```rust
//! use quatrot::format::{truncate_decimal, TruncatedDisplay};
//! use quatrot::Vector3;
//!
//! assert_eq!(truncate_decimal(1.999999996, 8), 1.99999999);
//!
//! let v = Vector3::new(0.123456789, 1.0, -2.5);
//! assert_eq!(v.truncated(3).to_string(), "V ( x: 0.123, y: 1, z: -2.5 )");
//! ```

use std::fmt;

pub use crate::constants::DEFAULT_PRECISION;

/// Truncates `value` to at most `digits` fractional decimal digits
///
/// Works on the shortest decimal representation that round-trips to
/// `value`, dropping everything past the requested digit. Values that
/// already have `digits` or fewer fractional digits, and non-finite
/// values, come back unchanged. A negative value truncated to zero is
/// returned as `0.0` so it never renders as `-0`.
///
/// # Examples
///
/// ```rust
/// use quatrot::format::truncate_decimal;
///
/// assert_eq!(truncate_decimal(0.70710678118, 4), 0.7071);
/// assert_eq!(truncate_decimal(-0.99999, 2), -0.99);
/// assert_eq!(truncate_decimal(3.5, 8), 3.5);
/// ```
pub fn truncate_decimal(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let repr = value.to_string();
    let truncated = match repr.find('.') {
        Some(dot) if repr.len() - dot - 1 > digits => {
            let end = if digits == 0 { dot } else { dot + 1 + digits };
            repr[..end].parse::<f64>().unwrap_or(value)
        }
        _ => value,
    };

    if truncated == 0.0 {
        0.0
    } else {
        truncated
    }
}

/// Precision carried by the formatter, or the library default
pub(crate) fn precision_of(f: &fmt::Formatter<'_>) -> usize {
    f.precision().unwrap_or(DEFAULT_PRECISION)
}

/// Largest precision a [`fmt::Formatter`] accepts
///
/// No finite `f64` has this many fractional digits in its shortest
/// representation, so clamping to it never changes the output.
const MAX_FORMATTER_PRECISION: usize = u16::MAX as usize;

/// A value paired with the number of fractional digits to render
#[derive(Debug, Clone, Copy)]
pub struct Truncated<'a, T: ?Sized> {
    value: &'a T,
    digits: usize,
}

impl<T: fmt::Display + ?Sized> fmt::Display for Truncated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits.min(MAX_FORMATTER_PRECISION);
        if f.alternate() {
            write!(f, "{:#.*}", digits, self.value)
        } else {
            write!(f, "{:.*}", digits, self.value)
        }
    }
}

/// Attach a display precision to a value
pub trait TruncatedDisplay: fmt::Display {
    /// Renders with `digits` fractional digits instead of the default 8
    fn truncated(&self, digits: usize) -> Truncated<'_, Self> {
        Truncated {
            value: self,
            digits,
        }
    }
}

impl<T: fmt::Display + ?Sized> TruncatedDisplay for T {}
