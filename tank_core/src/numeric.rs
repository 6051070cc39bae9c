//! # Numeric Field Utilities
//!
//! Form inputs in the host application arrive as free text. The engine
//! itself only accepts typed numbers, so the parse-and-validate step
//! lives here at the boundary: callers convert each raw field through
//! [`parse_field`] before constructing calculator inputs, and the error
//! names the offending field for display next to the form control.
//!
//! Also home to the decimal rounding rule used for reported minimum
//! thickness (3 decimal places, half away from zero).
//!
//! ## Example
//!
//! ```rust
//! use tank_core::numeric::{parse_field, round_to};
//!
//! let thickness = parse_field("original_thickness_in", "0.500 in").unwrap();
//! assert_eq!(thickness, 0.5);
//! assert_eq!(round_to(0.5497, 3), 0.550);
//! ```

use crate::errors::{CalcError, CalcResult};

/// Parse a free-text numeric form field.
///
/// Accepts optional surrounding whitespace and a trailing alphabetic unit
/// suffix (`"0.500 in"`, `"40ft"`, `"26700 psi"`). Exponent forms
/// (`"1e5"`) parse as written. Empty input fails as a missing field;
/// anything that is not a number followed by at most a unit suffix fails
/// with an error naming `field` — never a silently truncated value.
pub fn parse_field(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }

    // Whole token first, so exponent forms need no special casing.
    let candidate = match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            // Otherwise the tail must be a pure alphabetic unit suffix.
            let numeric = trimmed
                .trim_end_matches(|c: char| c.is_alphabetic())
                .trim_end();
            if numeric.len() == trimmed.len() {
                None
            } else {
                numeric.parse::<f64>().ok()
            }
        }
    };

    match candidate {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_input(field, raw, "Expected a numeric value")),
    }
}

/// Parse an optional free-text numeric form field.
///
/// Empty or whitespace-only input yields `Ok(None)`; anything else must
/// parse as a number.
pub fn parse_optional_field(field: &str, raw: &str) -> CalcResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_field(field, raw).map(Some)
}

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
