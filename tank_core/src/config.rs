//! # Engine Configuration
//!
//! Code-minimum thicknesses, the settlement compliance threshold, and the
//! corrosion allowance convention are standards values that revise between
//! editions, so they travel as an explicit [`CalcConfig`] passed into each
//! calculator call instead of literals baked into calculator code. The
//! host maintains these from its reference tables; `Default` carries the
//! values of the governing editions current at time of writing.

use serde::{Deserialize, Serialize};

/// Corrosion allowance convention for shell minimum thickness.
///
/// Historical report data in this domain disagrees on whether a flat
/// corrosion allowance is stacked on top of the one-foot-method required
/// thickness. The engine supports both so legacy reports recompute to
/// their original numbers, but the audited default is `None`: t-min is
/// the required thickness itself, with corrosion allowance expressed
/// through the course's declared original-vs-nominal thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "convention")]
pub enum CorrosionAllowance {
    /// t-min = t-required (audited convention)
    None,
    /// t-min = t-required + a flat allowance (legacy convention,
    /// conventionally 0.100 in)
    Flat { allowance_in: f64 },
}

impl CorrosionAllowance {
    /// The flat allowance added on top of required thickness, in inches
    pub fn allowance_in(&self) -> f64 {
        match self {
            CorrosionAllowance::None => 0.0,
            CorrosionAllowance::Flat { allowance_in } => *allowance_in,
        }
    }
}

impl Default for CorrosionAllowance {
    fn default() -> Self {
        CorrosionAllowance::None
    }
}

/// Configuration constants supplied to every calculator call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Code-minimum roof deck plate thickness (in)
    pub code_minimum_roof_thickness_in: f64,

    /// Code-minimum floor plate thickness (in)
    pub code_minimum_floor_thickness_in: f64,

    /// Maximum permitted planar tilt, as a percentage of tank diameter
    pub settlement_compliance_threshold_percent: f64,

    /// Shell t-min corrosion allowance convention
    pub corrosion_allowance: CorrosionAllowance,

    /// Allowable-bending constant C for the rafter-supported deck plate
    /// rule t = sqrt(load_psf * span_in^2 / C).
    ///
    /// Default folds together 144 in^2/ft^2, an allowable bending stress
    /// of 0.6 * 36 ksi for A36 plate, and a 0.75 simply-supported plate
    /// coefficient: 144 * 21600 / 0.75 = 4,147,200.
    pub plate_bending_constant: f64,

    /// Display ceiling for finite-but-huge remaining life values (years)
    pub remaining_life_ceiling_years: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            code_minimum_roof_thickness_in: 0.094,
            code_minimum_floor_thickness_in: 0.100,
            settlement_compliance_threshold_percent: 1.0,
            corrosion_allowance: CorrosionAllowance::None,
            plate_bending_constant: 4_147_200.0,
            remaining_life_ceiling_years: 999.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalcConfig::default();
        assert_eq!(config.code_minimum_roof_thickness_in, 0.094);
        assert_eq!(config.code_minimum_floor_thickness_in, 0.100);
        assert_eq!(config.settlement_compliance_threshold_percent, 1.0);
        assert_eq!(config.corrosion_allowance.allowance_in(), 0.0);
    }

    #[test]
    fn test_flat_allowance() {
        let convention = CorrosionAllowance::Flat { allowance_in: 0.100 };
        assert_eq!(convention.allowance_in(), 0.100);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = CalcConfig {
            corrosion_allowance: CorrosionAllowance::Flat { allowance_in: 0.100 },
            ..CalcConfig::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let roundtrip: CalcConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
