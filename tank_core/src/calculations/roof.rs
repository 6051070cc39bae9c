//! # Roof Plate Calculation
//!
//! Minimum deck thickness for fixed-roof plate. Rafter-supported decks
//! get a simply-supported-plate bending check across the rafter spacing;
//! self-supporting and simple roof plate cases fall back to the code
//! floor directly. Either way the code-minimum roof thickness from
//! [`CalcConfig`] is the absolute floor.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::calculations::roof::{calculate, RoofInput, RoofSupport};
//! use tank_core::config::CalcConfig;
//!
//! let input = RoofInput {
//!     label: "TK-101 roof".to_string(),
//!     support: RoofSupport::RafterSupported {
//!         live_load_psf: 20.0,
//!         snow_load_psf: 25.0,
//!         rafter_spacing_ft: 5.0,
//!     },
//!     original_thickness_in: 0.250,
//!     actual_thickness_in: 0.210,
//!     age_years: 15.0,
//! };
//!
//! let result = calculate(&input, &CalcConfig::default()).unwrap();
//! assert!(result.minimum_thickness_in >= 0.094);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::corrosion::{corrosion_rate_mpy, remaining_life_years};
use crate::errors::{CalcError, CalcResult};
use crate::numeric::round_to;

/// Roof support configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoofSupport {
    /// Self-supporting roof or simple roof plate: t-min is the code floor
    SelfSupporting,

    /// Rafter-supported deck: t-min from plate bending across the
    /// rafter spacing, floored at the code minimum
    RafterSupported {
        /// Live load (psf)
        live_load_psf: f64,
        /// Snow load (psf)
        snow_load_psf: f64,
        /// Center-to-center rafter spacing (ft)
        rafter_spacing_ft: f64,
    },
}

/// Which rule produced the governing roof t-min.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofGoverningRule {
    /// Plate bending across the rafter spacing governed
    PlateBending,
    /// The configured code-minimum thickness governed
    CodeMinimum,
}

/// Input for a roof plate evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoofInput {
    /// User label for this roof record
    pub label: String,

    /// Support configuration
    pub support: RoofSupport,

    /// Original (nominal) deck thickness (in)
    pub original_thickness_in: f64,

    /// Current measured deck thickness (in)
    pub actual_thickness_in: f64,

    /// Years in service since the original thickness applied
    pub age_years: f64,
}

impl RoofInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.original_thickness_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "original_thickness_in",
                self.original_thickness_in.to_string(),
                "Original thickness must be positive",
            ));
        }
        if self.actual_thickness_in < 0.0 {
            return Err(CalcError::invalid_input(
                "actual_thickness_in",
                self.actual_thickness_in.to_string(),
                "Actual thickness cannot be negative",
            ));
        }
        if self.age_years < 0.0 {
            return Err(CalcError::invalid_input(
                "age_years",
                self.age_years.to_string(),
                "Age cannot be negative",
            ));
        }
        if let RoofSupport::RafterSupported {
            live_load_psf,
            snow_load_psf,
            rafter_spacing_ft,
        } = self.support
        {
            if live_load_psf < 0.0 {
                return Err(CalcError::invalid_input(
                    "live_load_psf",
                    live_load_psf.to_string(),
                    "Live load cannot be negative",
                ));
            }
            if snow_load_psf < 0.0 {
                return Err(CalcError::invalid_input(
                    "snow_load_psf",
                    snow_load_psf.to_string(),
                    "Snow load cannot be negative",
                ));
            }
            if rafter_spacing_ft <= 0.0 {
                return Err(CalcError::invalid_input(
                    "rafter_spacing_ft",
                    rafter_spacing_ft.to_string(),
                    "Rafter spacing must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results for a roof plate evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoofResult {
    /// Governing minimum deck thickness (in), reported at 3 decimals
    pub minimum_thickness_in: f64,

    /// Which rule set the minimum
    pub governing_rule: RoofGoverningRule,

    /// Plate-bending thickness before the code floor was applied (in);
    /// `None` for self-supporting roofs
    pub bending_thickness_in: Option<f64>,

    /// Corrosion rate (mpy)
    pub corrosion_rate_mpy: f64,

    /// Remaining life (years); `None` when the rate is zero or negative
    pub remaining_life_years: Option<f64>,
}

/// Evaluate a roof plate record.
pub fn calculate(input: &RoofInput, config: &CalcConfig) -> CalcResult<RoofResult> {
    input.validate()?;

    let code_floor_in = config.code_minimum_roof_thickness_in;

    let (bending_thickness_in, minimum_thickness_in, governing_rule) = match input.support {
        RoofSupport::SelfSupporting => (None, code_floor_in, RoofGoverningRule::CodeMinimum),
        RoofSupport::RafterSupported {
            live_load_psf,
            snow_load_psf,
            rafter_spacing_ft,
        } => {
            // Simply-supported plate across the rafter spacing:
            // t = sqrt(load_psf * span_in^2 / C)
            let total_load_psf = live_load_psf + snow_load_psf;
            let span_in = rafter_spacing_ft * 12.0;
            let t_bending =
                (total_load_psf * span_in.powi(2) / config.plate_bending_constant).sqrt();

            if t_bending >= code_floor_in {
                (Some(t_bending), t_bending, RoofGoverningRule::PlateBending)
            } else {
                (Some(t_bending), code_floor_in, RoofGoverningRule::CodeMinimum)
            }
        }
    };

    let minimum_thickness_in = round_to(minimum_thickness_in, 3);

    let rate_mpy = corrosion_rate_mpy(
        input.original_thickness_in,
        input.actual_thickness_in,
        input.age_years,
    );
    let remaining_life = remaining_life_years(
        input.actual_thickness_in,
        minimum_thickness_in,
        rate_mpy,
        config,
    );

    Ok(RoofResult {
        minimum_thickness_in,
        governing_rule,
        bending_thickness_in,
        corrosion_rate_mpy: rate_mpy,
        remaining_life_years: remaining_life,
    })
}
