//! # Shell Thickness Calculation
//!
//! Per-course shell evaluation for a vertical cylindrical tank using the
//! API 653 one-foot method.
//!
//! ## Assumptions
//!
//! - Vertical cylindrical shell, courses ordered bottom to top
//! - Hydrostatic head measured to the bottom of each course
//! - 0.433 psi per foot of water column, scaled by specific gravity
//! - An absolute handling floor of 0.050 in on reported t-min
//!
//! ## Example
//!
//! ```rust
//! use tank_core::calculations::shell::{calculate, FluidColumn, ShellCourse, ShellInput, TankGeometry};
//! use tank_core::config::CalcConfig;
//!
//! let input = ShellInput {
//!     label: "TK-101 shell".to_string(),
//!     geometry: TankGeometry { diameter_ft: 120.0, shell_height_ft: Some(40.0) },
//!     fluid: FluidColumn { fill_height_ft: 40.0, specific_gravity: 1.0 },
//!     courses: vec![ShellCourse {
//!         course_number: 1,
//!         course_height_ft: 8.0,
//!         joint_efficiency: 0.85,
//!         allowable_stress_psi: 26700.0,
//!         original_thickness_in: 0.500,
//!         actual_thickness_in: 0.485,
//!         age_years: 10.0,
//!     }],
//! };
//!
//! let result = calculate(&input, &CalcConfig::default()).unwrap();
//! let course = &result.courses[0];
//! assert!((course.hydrostatic_pressure_psi - 17.32).abs() < 0.01);
//! assert!((course.minimum_thickness_in - 0.550).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::corrosion::{corrosion_rate_mpy, remaining_life_years};
use crate::errors::{CalcError, CalcResult};
use crate::numeric::round_to;

/// Hydrostatic pressure of one foot of water column (psi/ft)
pub const PSI_PER_FOOT_WATER: f64 = 0.433;

/// Absolute floor on reported minimum thickness (in), a material
/// handling minimum independent of the computed requirement
pub const HANDLING_MINIMUM_IN: f64 = 0.050;

/// Tank geometry supplied by the report aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankGeometry {
    /// Tank diameter (ft)
    pub diameter_ft: f64,

    /// Total shell height (ft), when known
    pub shell_height_ft: Option<f64>,
}

impl TankGeometry {
    /// Tank radius in inches, as used by the one-foot method
    pub fn radius_in(&self) -> f64 {
        self.diameter_ft * 12.0 / 2.0
    }
}

/// Stored liquid column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluidColumn {
    /// Maximum fill height (ft)
    pub fill_height_ft: f64,

    /// Specific gravity of the stored product (water = 1.0)
    pub specific_gravity: f64,
}

/// One shell course, numbered from the tank bottom.
///
/// ## JSON Example
///
/// ```json
/// {
///   "course_number": 1,
///   "course_height_ft": 8.0,
///   "joint_efficiency": 0.85,
///   "allowable_stress_psi": 26700.0,
///   "original_thickness_in": 0.500,
///   "actual_thickness_in": 0.485,
///   "age_years": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellCourse {
    /// 1-based course number, increasing from the tank bottom
    pub course_number: u32,

    /// Course height (ft)
    pub course_height_ft: f64,

    /// Weld joint efficiency E (0 < E <= 1)
    pub joint_efficiency: f64,

    /// Allowable stress S (psi)
    pub allowable_stress_psi: f64,

    /// Original (nominal) plate thickness (in)
    pub original_thickness_in: f64,

    /// Current measured thickness (in)
    pub actual_thickness_in: f64,

    /// Years in service since the original thickness applied
    pub age_years: f64,
}

/// Input for a full shell evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellInput {
    /// User label for this shell record (e.g., "TK-101 shell")
    pub label: String,

    /// Tank geometry
    pub geometry: TankGeometry,

    /// Stored liquid column
    pub fluid: FluidColumn,

    /// Shell courses, ordered bottom to top
    pub courses: Vec<ShellCourse>,
}

impl ShellInput {
    /// Validate input parameters.
    ///
    /// Errors name the offending field; course fields are addressed as
    /// `courses[i].field` so the host can highlight the right form row.
    pub fn validate(&self) -> CalcResult<()> {
        if self.geometry.diameter_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.diameter_ft",
                self.geometry.diameter_ft.to_string(),
                "Tank diameter must be positive",
            ));
        }
        if let Some(height) = self.geometry.shell_height_ft {
            if height <= 0.0 {
                return Err(CalcError::invalid_input(
                    "geometry.shell_height_ft",
                    height.to_string(),
                    "Shell height must be positive when supplied",
                ));
            }
        }
        if self.fluid.fill_height_ft < 0.0 {
            return Err(CalcError::invalid_input(
                "fluid.fill_height_ft",
                self.fluid.fill_height_ft.to_string(),
                "Fill height cannot be negative",
            ));
        }
        if self.fluid.specific_gravity <= 0.0 {
            return Err(CalcError::invalid_input(
                "fluid.specific_gravity",
                self.fluid.specific_gravity.to_string(),
                "Specific gravity must be positive",
            ));
        }
        if self.courses.is_empty() {
            return Err(CalcError::missing_field("courses"));
        }

        for (i, course) in self.courses.iter().enumerate() {
            if course.course_height_ft <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("courses[{i}].course_height_ft"),
                    course.course_height_ft.to_string(),
                    "Course height must be positive",
                ));
            }
            if course.joint_efficiency <= 0.0 || course.joint_efficiency > 1.0 {
                return Err(CalcError::invalid_input(
                    format!("courses[{i}].joint_efficiency"),
                    course.joint_efficiency.to_string(),
                    "Joint efficiency must satisfy 0 < E <= 1",
                ));
            }
            if course.allowable_stress_psi <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("courses[{i}].allowable_stress_psi"),
                    course.allowable_stress_psi.to_string(),
                    "Allowable stress must be positive",
                ));
            }
            if course.original_thickness_in <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("courses[{i}].original_thickness_in"),
                    course.original_thickness_in.to_string(),
                    "Original thickness must be positive",
                ));
            }
            if course.actual_thickness_in < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("courses[{i}].actual_thickness_in"),
                    course.actual_thickness_in.to_string(),
                    "Actual thickness cannot be negative",
                ));
            }
            if course.age_years < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("courses[{i}].age_years"),
                    course.age_years.to_string(),
                    "Age cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Per-course results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellCourseResult {
    /// 1-based course number, echoed from the input
    pub course_number: u32,

    /// Liquid head above the bottom of this course (ft), clamped >= 0
    pub liquid_head_ft: f64,

    /// Hydrostatic pressure at the course bottom (psi)
    pub hydrostatic_pressure_psi: f64,

    /// One-foot-method required thickness (in)
    pub required_thickness_in: f64,

    /// Governing minimum thickness (in): required thickness plus the
    /// configured corrosion allowance, floored at the handling minimum,
    /// reported at 3 decimals
    pub minimum_thickness_in: f64,

    /// Corrosion rate (mpy); negative when actual exceeds original
    pub corrosion_rate_mpy: f64,

    /// Remaining life (years); `None` when the rate is zero or negative
    pub remaining_life_years: Option<f64>,
}

impl ShellCourseResult {
    /// True when the measured thickness still meets the minimum
    pub fn meets_minimum(&self, actual_thickness_in: f64) -> bool {
        actual_thickness_in >= self.minimum_thickness_in
    }
}

/// Results for a full shell evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellResult {
    /// Per-course results, ordered bottom to top like the input
    pub courses: Vec<ShellCourseResult>,
}

impl ShellResult {
    /// The governing (shortest) finite remaining life across all
    /// courses; `None` when every course has an unbounded life
    pub fn governing_remaining_life_years(&self) -> Option<f64> {
        self.courses
            .iter()
            .filter_map(|c| c.remaining_life_years)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Evaluate every course of a tank shell.
///
/// Pure function: for fixed inputs the results are exactly reproducible.
///
/// # Errors
///
/// * `InvalidInput` for non-positive geometry, stress, or efficiency
/// * `CalculationFailed` when `S*E - 0.6*P <= 0` for some course, which
///   only occurs with implausible inputs; the error is explicit rather
///   than a NaN or negative thickness
pub fn calculate(input: &ShellInput, config: &CalcConfig) -> CalcResult<ShellResult> {
    input.validate()?;

    let radius_in = input.geometry.radius_in();
    let allowance_in = config.corrosion_allowance.allowance_in();

    let mut courses = Vec::with_capacity(input.courses.len());
    let mut height_below_ft = 0.0;

    for (i, course) in input.courses.iter().enumerate() {
        // Head above the bottom of this course; a course entirely above
        // the liquid surface sees zero hydrostatic pressure.
        let liquid_head_ft = (input.fluid.fill_height_ft - height_below_ft).max(0.0);
        height_below_ft += course.course_height_ft;

        let pressure_psi = PSI_PER_FOOT_WATER * input.fluid.specific_gravity * liquid_head_ft;

        // One-foot method: t = P*R / (S*E - 0.6*P)
        let denominator =
            course.allowable_stress_psi * course.joint_efficiency - 0.6 * pressure_psi;
        if denominator <= 0.0 {
            return Err(CalcError::calculation_failed(
                "shell one-foot method",
                format!(
                    "courses[{i}]: S*E - 0.6*P = {denominator:.1} psi; \
                     stress and joint efficiency cannot support the hydrostatic pressure"
                ),
            ));
        }
        let required_thickness_in = pressure_psi * radius_in / denominator;

        let minimum_thickness_in = round_to(
            (required_thickness_in + allowance_in).max(HANDLING_MINIMUM_IN),
            3,
        );

        let rate_mpy = corrosion_rate_mpy(
            course.original_thickness_in,
            course.actual_thickness_in,
            course.age_years,
        );
        let remaining_life = remaining_life_years(
            course.actual_thickness_in,
            minimum_thickness_in,
            rate_mpy,
            config,
        );

        courses.push(ShellCourseResult {
            course_number: course.course_number,
            liquid_head_ft,
            hydrostatic_pressure_psi: pressure_psi,
            required_thickness_in,
            minimum_thickness_in,
            corrosion_rate_mpy: rate_mpy,
            remaining_life_years: remaining_life,
        });
    }

    Ok(ShellResult { courses })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorrosionAllowance;

    /// Hand-checked regression tank: 120 ft diameter, 40 ft fill, SG 1.0,
    /// E 0.85, S 26,700 psi, 0.500 -> 0.485 in over 10 years.
    fn test_shell() -> ShellInput {
        ShellInput {
            label: "TK-101 shell".to_string(),
            geometry: TankGeometry {
                diameter_ft: 120.0,
                shell_height_ft: Some(40.0),
            },
            fluid: FluidColumn {
                fill_height_ft: 40.0,
                specific_gravity: 1.0,
            },
            courses: vec![
                ShellCourse {
                    course_number: 1,
                    course_height_ft: 8.0,
                    joint_efficiency: 0.85,
                    allowable_stress_psi: 26700.0,
                    original_thickness_in: 0.500,
                    actual_thickness_in: 0.485,
                    age_years: 10.0,
                },
                ShellCourse {
                    course_number: 2,
                    course_height_ft: 8.0,
                    joint_efficiency: 0.85,
                    allowable_stress_psi: 26700.0,
                    original_thickness_in: 0.4375,
                    actual_thickness_in: 0.430,
                    age_years: 10.0,
                },
            ],
        }
    }

    #[test]
    fn test_known_value_regression() {
        let result = calculate(&test_shell(), &CalcConfig::default()).unwrap();
        let bottom = &result.courses[0];

        // P = 0.433 * 1.0 * 40 = 17.32 psi
        assert!((bottom.hydrostatic_pressure_psi - 17.32).abs() < 1e-9);

        // t_req = (17.32 * 720) / (26700 * 0.85 - 0.6 * 17.32) = 0.5497...
        assert!((bottom.required_thickness_in - 0.5497).abs() < 0.0005);

        // t_min rounds to 0.550 under the no-allowance convention
        assert!((bottom.minimum_thickness_in - 0.550).abs() < 1e-9);

        // CR = ((0.500 - 0.485) / 10) * 1000 = 1.5 mpy
        assert!((bottom.corrosion_rate_mpy - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_meets_minimum_verdict() {
        let result = calculate(&test_shell(), &CalcConfig::default()).unwrap();
        let bottom = &result.courses[0];

        // 0.485 actual against a 0.550 minimum fails; a reading at or
        // above the minimum passes.
        assert!(!bottom.meets_minimum(0.485));
        assert!(bottom.meets_minimum(0.550));
        assert!(bottom.meets_minimum(0.560));
    }

    #[test]
    fn test_flat_allowance_convention() {
        let config = CalcConfig {
            corrosion_allowance: CorrosionAllowance::Flat { allowance_in: 0.100 },
            ..CalcConfig::default()
        };
        let result = calculate(&test_shell(), &config).unwrap();

        // Same t_req, t_min shifted by the flat allowance: ~0.650
        assert!((result.courses[0].minimum_thickness_in - 0.650).abs() < 1e-9);
    }

    #[test]
    fn test_head_decreases_up_the_shell() {
        let result = calculate(&test_shell(), &CalcConfig::default()).unwrap();

        // Course 2 bottom sits 8 ft up: head = 40 - 8 = 32 ft
        assert_eq!(result.courses[0].liquid_head_ft, 40.0);
        assert_eq!(result.courses[1].liquid_head_ft, 32.0);
        assert!(
            result.courses[1].hydrostatic_pressure_psi
                < result.courses[0].hydrostatic_pressure_psi
        );
    }

    #[test]
    fn test_course_above_liquid_sees_zero_head() {
        let mut input = test_shell();
        input.fluid.fill_height_ft = 6.0;
        let result = calculate(&input, &CalcConfig::default()).unwrap();

        assert_eq!(result.courses[0].liquid_head_ft, 6.0);
        // Course 2 bottom at 8 ft is above a 6 ft liquid surface
        assert_eq!(result.courses[1].liquid_head_ft, 0.0);
        assert_eq!(result.courses[1].hydrostatic_pressure_psi, 0.0);
        // Handling floor governs when the required thickness is zero
        assert_eq!(result.courses[1].minimum_thickness_in, HANDLING_MINIMUM_IN);
    }

    #[test]
    fn test_zero_age_course() {
        let mut input = test_shell();
        input.courses[0].age_years = 0.0;
        let result = calculate(&input, &CalcConfig::default()).unwrap();

        assert_eq!(result.courses[0].corrosion_rate_mpy, 0.0);
        assert_eq!(result.courses[0].remaining_life_years, None);
    }

    #[test]
    fn test_remaining_life_floors_at_zero() {
        // Bottom course of the regression tank is already below its
        // 0.550 in minimum, so remaining life reads zero.
        let result = calculate(&test_shell(), &CalcConfig::default()).unwrap();
        assert_eq!(result.courses[0].remaining_life_years, Some(0.0));
    }

    #[test]
    fn test_governing_remaining_life() {
        let result = calculate(&test_shell(), &CalcConfig::default()).unwrap();
        // Bottom course governs at zero years
        assert_eq!(result.governing_remaining_life_years(), Some(0.0));
    }

    #[test]
    fn test_degenerate_denominator_is_explicit_error() {
        let mut input = test_shell();
        input.courses[0].allowable_stress_psi = 10.0;
        input.courses[0].joint_efficiency = 0.5;

        let err = calculate(&input, &CalcConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_invalid_geometry_names_field() {
        let mut input = test_shell();
        input.geometry.diameter_ft = 0.0;
        let err = calculate(&input, &CalcConfig::default()).unwrap_err();
        assert!(err.to_string().contains("diameter_ft"));

        let mut input = test_shell();
        input.courses[1].joint_efficiency = 1.3;
        let err = calculate(&input, &CalcConfig::default()).unwrap_err();
        assert!(err.to_string().contains("courses[1].joint_efficiency"));
    }

    #[test]
    fn test_empty_courses_rejected() {
        let mut input = test_shell();
        input.courses.clear();
        let err = calculate(&input, &CalcConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_idempotence() {
        let input = test_shell();
        let config = CalcConfig::default();
        let a = calculate(&input, &config).unwrap();
        let b = calculate(&input, &config).unwrap();

        for (x, y) in a.courses.iter().zip(b.courses.iter()) {
            assert_eq!(x.required_thickness_in.to_bits(), y.required_thickness_in.to_bits());
            assert_eq!(x.corrosion_rate_mpy.to_bits(), y.corrosion_rate_mpy.to_bits());
            assert_eq!(x.remaining_life_years, y.remaining_life_years);
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_shell();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ShellInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.courses.len(), roundtrip.courses.len());

        let result = calculate(&input, &CalcConfig::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("minimum_thickness_in"));
        assert!(json.contains("remaining_life_years"));
    }
}
