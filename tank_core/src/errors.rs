//! # Error Types
//!
//! Structured error types for tank_core. Each variant carries enough
//! context to tell the reviewing inspector exactly which field of which
//! record refused to compute.
//!
//! Calculators reserve errors for genuinely malformed input: missing or
//! non-numeric fields, non-positive geometry, a degenerate one-foot-method
//! denominator. Domain-expected edge cases (zero age, zero corrosion rate,
//! too few elevation points for a tilt fit) never error; they produce
//! documented sentinel values inside the result types instead.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_ft: f64) -> CalcResult<()> {
//!     if diameter_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "diameter_ft",
//!             diameter_ft.to_string(),
//!             "Tank diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tank_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Serializes with a `type` tag so the host web application can map
/// errors back onto the offending form field.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, unparseable)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Calculation failed (degenerate denominator, implausible inputs)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Pipe schedule designation not in the t-min lookup table
    #[error("Unknown pipe schedule: {designation}")]
    ScheduleNotFound { designation: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a ScheduleNotFound error
    pub fn schedule_not_found(designation: impl Into<String>) -> Self {
        CalcError::ScheduleNotFound {
            designation: designation.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::ScheduleNotFound { .. } => "SCHEDULE_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("diameter_ft", "-120", "Tank diameter must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("fill_height_ft").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::schedule_not_found("Sch 200").error_code(), "SCHEDULE_NOT_FOUND");
        assert_eq!(
            CalcError::calculation_failed("shell one-foot method", "degenerate denominator")
                .error_code(),
            "CALCULATION_FAILED"
        );
    }

    #[test]
    fn test_error_display_names_field() {
        let error = CalcError::invalid_input("courses[2].joint_efficiency", "1.3", "must be 0 < E <= 1");
        assert!(error.to_string().contains("courses[2].joint_efficiency"));
    }
}
