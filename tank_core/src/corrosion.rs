//! # Generic Corrosion Model
//!
//! Corrosion rate and remaining life from a pair of thickness readings.
//! This is the one place that arithmetic lives; the shell, roof, floor,
//! and nozzle calculators all call through here rather than repeating it.
//!
//! ## Sentinels
//!
//! - Zero (or negative) elapsed time yields a corrosion rate of 0.0,
//!   never a division error.
//! - A current reading thicker than the previous one yields a negative
//!   rate. It is surfaced, not clamped, so the inconsistency is visible
//!   to the inspector reviewing the report.
//! - A rate of zero or less yields `None` remaining life: no finite
//!   estimate exists. Finite values are clamped to
//!   `[0, remaining_life_ceiling_years]`; a component already below
//!   t-min reports zero years, not a negative number.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::config::CalcConfig;
//! use tank_core::corrosion::{CmlInput, evaluate};
//!
//! let input = CmlInput {
//!     label: "CML-4".to_string(),
//!     previous_thickness_in: 0.500,
//!     current_thickness_in: 0.485,
//!     elapsed_years: 10.0,
//!     minimum_required_in: 0.200,
//! };
//!
//! let result = evaluate(&input, &CalcConfig::default()).unwrap();
//! assert!((result.corrosion_rate_mpy - 1.5).abs() < 1e-9);
//! assert!((result.remaining_life_years.unwrap() - 190.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::errors::{CalcError, CalcResult};
use crate::units::Mpy;

/// Corrosion rate in mils per year from paired thickness readings.
///
/// `((previous - current) / elapsed) * 1000`; defined as 0.0 when
/// `elapsed_years <= 0`. Thickness growth produces a negative rate.
pub fn corrosion_rate_mpy(previous_in: f64, current_in: f64, elapsed_years: f64) -> f64 {
    if elapsed_years <= 0.0 {
        return 0.0;
    }
    ((previous_in - current_in) / elapsed_years) * 1000.0
}

/// Projected years until `current_in` corrodes down to `t_min_in`.
///
/// `None` when `rate_mpy <= 0` (no finite estimate). Otherwise clamped
/// to `[0, config.remaining_life_ceiling_years]`.
pub fn remaining_life_years(
    current_in: f64,
    t_min_in: f64,
    rate_mpy: f64,
    config: &CalcConfig,
) -> Option<f64> {
    if rate_mpy <= 0.0 {
        return None;
    }
    let years = (current_in - t_min_in) / Mpy(rate_mpy).inches_per_year();
    Some(years.clamp(0.0, config.remaining_life_ceiling_years))
}

/// Input for a generic corrosion monitoring location.
///
/// Works for any component with a previous/current thickness pair and a
/// known minimum: shell CMLs, nozzle necks with an entered t-min, roof
/// and floor spot readings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "CML-4",
///   "previous_thickness_in": 0.500,
///   "current_thickness_in": 0.485,
///   "elapsed_years": 10.0,
///   "minimum_required_in": 0.200
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmlInput {
    /// User label for this location (e.g., "CML-4", "North manway neck")
    pub label: String,

    /// Original or previous-survey thickness (in)
    pub previous_thickness_in: f64,

    /// Current measured thickness (in)
    pub current_thickness_in: f64,

    /// Years between the two readings
    pub elapsed_years: f64,

    /// Minimum required thickness for this location (in), either a
    /// practical t-min or a computed one
    pub minimum_required_in: f64,
}

impl CmlInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.previous_thickness_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "previous_thickness_in",
                self.previous_thickness_in.to_string(),
                "Previous thickness must be positive",
            ));
        }
        if self.current_thickness_in < 0.0 {
            return Err(CalcError::invalid_input(
                "current_thickness_in",
                self.current_thickness_in.to_string(),
                "Current thickness cannot be negative",
            ));
        }
        if self.elapsed_years < 0.0 {
            return Err(CalcError::invalid_input(
                "elapsed_years",
                self.elapsed_years.to_string(),
                "Elapsed time cannot be negative",
            ));
        }
        if self.minimum_required_in < 0.0 {
            return Err(CalcError::invalid_input(
                "minimum_required_in",
                self.minimum_required_in.to_string(),
                "Minimum required thickness cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results for a generic corrosion monitoring location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmlResult {
    /// Corrosion rate (mpy); negative when the current reading exceeds
    /// the previous one
    pub corrosion_rate_mpy: f64,

    /// Remaining life (years); `None` when the rate is zero or negative
    pub remaining_life_years: Option<f64>,

    /// The t-min the remaining life was measured against (in)
    pub governing_t_min_in: f64,
}

impl CmlResult {
    /// True when the current thickness trend never reaches t-min
    pub fn life_is_unbounded(&self) -> bool {
        self.remaining_life_years.is_none()
    }
}

/// Evaluate a corrosion monitoring location.
///
/// Pure function; identical inputs always produce identical outputs.
pub fn evaluate(input: &CmlInput, config: &CalcConfig) -> CalcResult<CmlResult> {
    input.validate()?;

    let rate = corrosion_rate_mpy(
        input.previous_thickness_in,
        input.current_thickness_in,
        input.elapsed_years,
    );
    let life = remaining_life_years(
        input.current_thickness_in,
        input.minimum_required_in,
        rate,
        config,
    );

    Ok(CmlResult {
        corrosion_rate_mpy: rate,
        remaining_life_years: life,
        governing_t_min_in: input.minimum_required_in,
    })
}
