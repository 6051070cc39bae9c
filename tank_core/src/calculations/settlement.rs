//! # Settlement / Tilt Analysis
//!
//! Foundation settlement evaluation from elevation survey points around
//! the tank circumference (8/12/16/24 points conventional, any count
//! accepted; planar tilt needs at least 3).
//!
//! All internal math is in feet; per-point settlements are additionally
//! reported in inches for display, converted only at this boundary.
//!
//! ## Planar tilt
//!
//! Each survey point maps to `(cos θ, sin θ, settlement − mean)` and a
//! best-fit plane `z = a·x + b·y` is solved from the 2x2 least-squares
//! normal equations. Tilt is `atan(sqrt(a² + b²))` in degrees. With
//! fewer than 3 points (or a singular normal matrix) the tilt is
//! reported as `None` rather than a fabricated angle.
//!
//! ## Out-of-plane settlement
//!
//! Reported as the population standard deviation of per-point settlement
//! about the mean. This is a simplified proxy for deviation from the
//! fitted plane; residuals from the plane itself would be the rigorous
//! version.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::calculations::settlement::{analyze, ElevationPoint, SettlementInput};
//! use tank_core::config::CalcConfig;
//!
//! let points: Vec<ElevationPoint> = (0..8)
//!     .map(|i| ElevationPoint {
//!         angle_degrees: i as f64 * 45.0,
//!         previous_elevation_ft: 100.00,
//!         current_elevation_ft: 99.98,
//!     })
//!     .collect();
//!
//! let input = SettlementInput {
//!     label: "TK-101 survey".to_string(),
//!     tank_diameter_ft: 120.0,
//!     points,
//! };
//!
//! let result = analyze(&input, &CalcConfig::default()).unwrap();
//! assert_eq!(result.differential_settlement_ft, 0.0);
//! assert!(result.compliant);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Feet, Inches};

/// Minimum survey points for a meaningful plane fit
const MIN_POINTS_FOR_TILT: usize = 3;

/// One elevation survey point on the tank circumference.
///
/// ## JSON Example
///
/// ```json
/// {
///   "angle_degrees": 45.0,
///   "previous_elevation_ft": 100.00,
///   "current_elevation_ft": 99.98
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationPoint {
    /// Position around the circumference (0-360 degrees)
    pub angle_degrees: f64,

    /// Baseline survey elevation (ft)
    pub previous_elevation_ft: f64,

    /// Current survey elevation (ft)
    pub current_elevation_ft: f64,
}

impl ElevationPoint {
    /// Settlement since the baseline (ft); positive = downward movement
    pub fn settlement_ft(&self) -> f64 {
        self.previous_elevation_ft - self.current_elevation_ft
    }
}

/// Input for a settlement survey analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementInput {
    /// User label for this survey (e.g., "TK-101 2025 survey")
    pub label: String,

    /// Tank diameter (ft), the tilt percentage base
    pub tank_diameter_ft: f64,

    /// Survey points, conventionally evenly spaced around the shell
    pub points: Vec<ElevationPoint>,
}

impl SettlementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.tank_diameter_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "tank_diameter_ft",
                self.tank_diameter_ft.to_string(),
                "Tank diameter must be positive",
            ));
        }
        if self.points.is_empty() {
            return Err(CalcError::missing_field("points"));
        }
        for (i, point) in self.points.iter().enumerate() {
            if !(0.0..=360.0).contains(&point.angle_degrees) {
                return Err(CalcError::invalid_input(
                    format!("points[{i}].angle_degrees"),
                    point.angle_degrees.to_string(),
                    "Angle must be between 0 and 360 degrees",
                ));
            }
        }
        Ok(())
    }
}

/// Per-point settlement, in survey feet and display inches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSettlement {
    /// Position around the circumference (degrees)
    pub angle_degrees: f64,

    /// Settlement (ft); positive = downward
    pub settlement_ft: Feet,

    /// Settlement for display (in)
    pub settlement_in: Inches,
}

/// Results for a settlement survey analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Per-point settlements in input order
    pub points: Vec<PointSettlement>,

    /// Largest per-point settlement (ft)
    pub max_settlement_ft: f64,

    /// Smallest per-point settlement (ft)
    pub min_settlement_ft: f64,

    /// max - min settlement (ft)
    pub differential_settlement_ft: f64,

    /// Mean settlement (ft), the bulk subsidence component
    pub uniform_settlement_ft: f64,

    /// Standard deviation of settlement about the mean (ft), the
    /// out-of-plane proxy
    pub out_of_plane_settlement_ft: f64,

    /// Best-fit plane tilt (degrees); `None` with fewer than 3 points
    /// or a degenerate fit
    pub planar_tilt_degrees: Option<f64>,

    /// Differential settlement as a percentage of tank diameter
    pub tilt_percentage: f64,

    /// Threshold the tilt percentage was checked against
    pub compliance_threshold_percent: f64,

    /// True when tilt percentage is within the threshold
    pub compliant: bool,
}

/// Fit `z = a*x + b*y` by least squares over `(cos θ, sin θ, z - mean)`.
///
/// Returns `None` when the 2x2 normal matrix is singular, which happens
/// when the points do not span the plane (e.g., all at one angle).
fn fit_plane(points: &[ElevationPoint], mean_z: f64) -> Option<(f64, f64)> {
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    let mut sxz = 0.0;
    let mut syz = 0.0;

    for point in points {
        let theta = Degrees(point.angle_degrees).radians();
        let x = theta.cos();
        let y = theta.sin();
        let z = point.settlement_ft() - mean_z;

        sxx += x * x;
        sxy += x * y;
        syy += y * y;
        sxz += x * z;
        syz += y * z;
    }

    let det = sxx * syy - sxy * sxy;
    if det.abs() < 1e-12 {
        return None;
    }

    let a = (sxz * syy - syz * sxy) / det;
    let b = (syz * sxx - sxz * sxy) / det;
    Some((a, b))
}

/// Analyze a settlement survey.
///
/// Pure function; identical inputs always produce identical outputs.
pub fn analyze(input: &SettlementInput, config: &CalcConfig) -> CalcResult<SettlementResult> {
    input.validate()?;

    let settlements: Vec<f64> = input.points.iter().map(ElevationPoint::settlement_ft).collect();
    let count = settlements.len();

    let max_settlement = settlements.iter().cloned().fold(f64::MIN, f64::max);
    let min_settlement = settlements.iter().cloned().fold(f64::MAX, f64::min);
    let differential = max_settlement - min_settlement;
    let uniform = settlements.iter().sum::<f64>() / count as f64;

    let variance = settlements
        .iter()
        .map(|s| (s - uniform).powi(2))
        .sum::<f64>()
        / count as f64;
    let out_of_plane = variance.sqrt();

    let planar_tilt_degrees = if count < MIN_POINTS_FOR_TILT {
        None
    } else {
        fit_plane(&input.points, uniform)
            .map(|(a, b)| (a * a + b * b).sqrt().atan().to_degrees())
    };

    let tilt_percentage = differential / input.tank_diameter_ft * 100.0;
    let threshold = config.settlement_compliance_threshold_percent;

    let points = input
        .points
        .iter()
        .map(|p| {
            let settlement = Feet(p.settlement_ft());
            PointSettlement {
                angle_degrees: p.angle_degrees,
                settlement_ft: settlement,
                settlement_in: settlement.into(),
            }
        })
        .collect();

    Ok(SettlementResult {
        points,
        max_settlement_ft: max_settlement,
        min_settlement_ft: min_settlement,
        differential_settlement_ft: differential,
        uniform_settlement_ft: uniform,
        out_of_plane_settlement_ft: out_of_plane,
        planar_tilt_degrees,
        tilt_percentage,
        compliance_threshold_percent: threshold,
        compliant: tilt_percentage <= threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey_with_settlements(settlements_ft: &[f64]) -> SettlementInput {
        let step = 360.0 / settlements_ft.len() as f64;
        let points = settlements_ft
            .iter()
            .enumerate()
            .map(|(i, s)| ElevationPoint {
                angle_degrees: i as f64 * step,
                previous_elevation_ft: 100.0,
                current_elevation_ft: 100.0 - s,
            })
            .collect();
        SettlementInput {
            label: "Test survey".to_string(),
            tank_diameter_ft: 120.0,
            points,
        }
    }

    #[test]
    fn test_settlement_symmetry() {
        // Identical previous and current elevations everywhere.
        let input = survey_with_settlements(&[0.0; 8]);
        let result = analyze(&input, &CalcConfig::default()).unwrap();

        assert_eq!(result.differential_settlement_ft, 0.0);
        assert_eq!(result.planar_tilt_degrees, Some(0.0));
        assert_eq!(result.tilt_percentage, 0.0);
        assert!(result.compliant);
    }

    #[test]
    fn test_settlement_extremity() {
        // One point settled 1 inch (1/12 ft), the rest unmoved.
        let one_inch_ft = 1.0 / 12.0;
        let mut settlements = [0.0; 8];
        settlements[4] = one_inch_ft;
        let input = survey_with_settlements(&settlements);
        let result = analyze(&input, &CalcConfig::default()).unwrap();

        assert!((result.max_settlement_ft - one_inch_ft).abs() < 1e-12);
        assert_eq!(result.min_settlement_ft, 0.0);
        assert!((result.differential_settlement_ft - one_inch_ft).abs() < 1e-12);
    }

    #[test]
    fn test_positive_settlement_is_downward() {
        let point = ElevationPoint {
            angle_degrees: 0.0,
            previous_elevation_ft: 100.00,
            current_elevation_ft: 99.95,
        };
        assert!((point.settlement_ft() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_display_inches_conversion() {
        let input = survey_with_settlements(&[0.05, 0.05, 0.05, 0.05]);
        let result = analyze(&input, &CalcConfig::default()).unwrap();
        assert!((result.points[0].settlement_in.value() - 0.6).abs() < 1e-9);
        assert!((result.points[0].settlement_ft.value() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_subsidence_has_no_tilt() {
        // Everything down by the same 0.1 ft: pure bulk subsidence.
        let input = survey_with_settlements(&[0.1; 12]);
        let result = analyze(&input, &CalcConfig::default()).unwrap();

        assert!((result.uniform_settlement_ft - 0.1).abs() < 1e-12);
        assert_eq!(result.differential_settlement_ft, 0.0);
        assert!(result.planar_tilt_degrees.unwrap().abs() < 1e-9);
        assert!(result.out_of_plane_settlement_ft.abs() < 1e-12);
    }

    #[test]
    fn test_pure_tilt_recovered_by_plane_fit() {
        // Settlement varying as 0.05 * cos(theta) is a perfect plane
        // through the mean with a = 0.05, b = 0.
        let settlements: Vec<f64> = (0..8)
            .map(|i| 0.05 * (i as f64 * 45.0f64).to_radians().cos())
            .collect();
        let input = survey_with_settlements(&settlements);
        let result = analyze(&input, &CalcConfig::default()).unwrap();

        let expected = 0.05f64.atan().to_degrees();
        let tilt = result.planar_tilt_degrees.unwrap();
        assert!((tilt - expected).abs() < 1e-6);
    }

    #[test]
    fn test_two_points_yield_no_tilt() {
        let input = SettlementInput {
            label: "Sparse".to_string(),
            tank_diameter_ft: 60.0,
            points: vec![
                ElevationPoint {
                    angle_degrees: 0.0,
                    previous_elevation_ft: 100.0,
                    current_elevation_ft: 99.9,
                },
                ElevationPoint {
                    angle_degrees: 180.0,
                    previous_elevation_ft: 100.0,
                    current_elevation_ft: 100.0,
                },
            ],
        };
        let result = analyze(&input, &CalcConfig::default()).unwrap();

        // Extrema still reported, tilt explicitly undefined
        assert_eq!(result.planar_tilt_degrees, None);
        assert!((result.differential_settlement_ft - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_angles_yield_no_tilt() {
        // All points at the same angle cannot span a plane.
        let points = (0..4)
            .map(|i| ElevationPoint {
                angle_degrees: 90.0,
                previous_elevation_ft: 100.0,
                current_elevation_ft: 100.0 - 0.01 * i as f64,
            })
            .collect();
        let input = SettlementInput {
            label: "Degenerate".to_string(),
            tank_diameter_ft: 60.0,
            points,
        };
        let result = analyze(&input, &CalcConfig::default()).unwrap();
        assert_eq!(result.planar_tilt_degrees, None);
    }

    #[test]
    fn test_compliance_threshold() {
        // Differential 0.5 ft on a 120 ft tank: 0.417%, within 1%.
        let input = survey_with_settlements(&[0.0, 0.1, 0.3, 0.5, 0.3, 0.1, 0.0, 0.0]);
        let result = analyze(&input, &CalcConfig::default()).unwrap();
        assert!((result.tilt_percentage - 0.4167).abs() < 0.001);
        assert!(result.compliant);

        // Tighten the threshold below the observed tilt
        let config = CalcConfig {
            settlement_compliance_threshold_percent: 0.25,
            ..CalcConfig::default()
        };
        let result = analyze(&input, &config).unwrap();
        assert!(!result.compliant);
    }

    #[test]
    fn test_invalid_diameter_rejected() {
        let mut input = survey_with_settlements(&[0.0; 8]);
        input.tank_diameter_ft = -120.0;
        let err = analyze(&input, &CalcConfig::default()).unwrap_err();
        assert!(err.to_string().contains("tank_diameter_ft"));
    }

    #[test]
    fn test_empty_points_rejected() {
        let input = SettlementInput {
            label: "Empty".to_string(),
            tank_diameter_ft: 120.0,
            points: Vec::new(),
        };
        let err = analyze(&input, &CalcConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_out_of_range_angle_rejected() {
        let mut input = survey_with_settlements(&[0.0; 4]);
        input.points[2].angle_degrees = 400.0;
        let err = analyze(&input, &CalcConfig::default()).unwrap_err();
        assert!(err.to_string().contains("points[2].angle_degrees"));
    }

    #[test]
    fn test_idempotence() {
        let input = survey_with_settlements(&[0.0, 0.02, 0.05, 0.03, 0.0, -0.01, 0.0, 0.01]);
        let config = CalcConfig::default();
        let a = analyze(&input, &config).unwrap();
        let b = analyze(&input, &config).unwrap();

        assert_eq!(a.planar_tilt_degrees, b.planar_tilt_degrees);
        assert_eq!(
            a.out_of_plane_settlement_ft.to_bits(),
            b.out_of_plane_settlement_ft.to_bits()
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = survey_with_settlements(&[0.0, 0.02, 0.05, 0.03]);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SettlementInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.points.len(), roundtrip.points.len());

        let result = analyze(&input, &CalcConfig::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: SettlementResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.compliant, roundtrip.compliant);
    }
}
