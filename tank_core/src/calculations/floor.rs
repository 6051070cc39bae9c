//! # Floor Plate Calculation
//!
//! Floor (bottom) plate evaluation. t-min is the configured code floor
//! minimum. Soil-side and product-side corrosion rates are independent
//! operator-supplied inputs, not derived quantities; when both are given
//! the two sides add for the through-thickness trend. When per-scan
//! thickness data is available the calculator also reports the average
//! and minimum across scans and projects remaining life from each: the
//! average describes typical condition, the minimum is the worst case
//! and governs.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::calculations::floor::{calculate, FloorInput};
//! use tank_core::config::CalcConfig;
//!
//! let input = FloorInput {
//!     label: "TK-101 floor".to_string(),
//!     original_thickness_in: 0.250,
//!     actual_thickness_in: 0.220,
//!     age_years: 15.0,
//!     soil_side_rate_mpy: Some(1.0),
//!     product_side_rate_mpy: Some(0.5),
//!     scan_readings_in: vec![0.230, 0.225, 0.210, 0.218],
//! };
//!
//! let result = calculate(&input, &CalcConfig::default()).unwrap();
//! let scans = result.scan_summary.unwrap();
//! assert_eq!(scans.minimum_thickness_in, 0.210);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::corrosion::{corrosion_rate_mpy, remaining_life_years};
use crate::errors::{CalcError, CalcResult};

/// Input for a floor plate evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "TK-101 floor",
///   "original_thickness_in": 0.250,
///   "actual_thickness_in": 0.220,
///   "age_years": 15.0,
///   "soil_side_rate_mpy": 1.0,
///   "product_side_rate_mpy": 0.5,
///   "scan_readings_in": [0.230, 0.225, 0.210, 0.218]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorInput {
    /// User label for this floor record
    pub label: String,

    /// Original (nominal) plate thickness (in)
    pub original_thickness_in: f64,

    /// Current representative measured thickness (in)
    pub actual_thickness_in: f64,

    /// Years in service since the original thickness applied
    pub age_years: f64,

    /// Operator-supplied soil-side corrosion rate (mpy)
    pub soil_side_rate_mpy: Option<f64>,

    /// Operator-supplied product-side corrosion rate (mpy)
    pub product_side_rate_mpy: Option<f64>,

    /// Per-point scan thickness readings (in), when a floor scan was run
    #[serde(default)]
    pub scan_readings_in: Vec<f64>,
}

impl FloorInput {
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
        for (i, reading) in self.scan_readings_in.iter().enumerate() {
            if *reading < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("scan_readings_in[{i}]"),
                    reading.to_string(),
                    "Scan reading cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Combined operator-supplied rate (mpy): soil side plus product
    /// side, `None` when neither was entered
    pub fn operator_rate_mpy(&self) -> Option<f64> {
        match (self.soil_side_rate_mpy, self.product_side_rate_mpy) {
            (None, None) => None,
            (soil, product) => Some(soil.unwrap_or(0.0) + product.unwrap_or(0.0)),
        }
    }
}

/// Roll-up of per-scan thickness readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorScanSummary {
    /// Mean scan thickness (in), the typical condition
    pub average_thickness_in: f64,

    /// Smallest scan thickness (in), the worst case
    pub minimum_thickness_in: f64,

    /// Remaining life projected from the average reading (years)
    pub remaining_life_from_average_years: Option<f64>,

    /// Remaining life projected from the minimum reading (years);
    /// governs the floor assessment
    pub remaining_life_from_minimum_years: Option<f64>,

    /// Number of scan readings
    pub count: usize,
}

/// Results for a floor plate evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorResult {
    /// Code-minimum floor thickness used as t-min (in)
    pub minimum_thickness_in: f64,

    /// Rate from the paired original/actual readings (mpy)
    pub measured_rate_mpy: f64,

    /// Combined soil + product operator rate (mpy), when entered
    pub operator_rate_mpy: Option<f64>,

    /// The rate used for remaining life (mpy): the larger of measured
    /// and operator rates
    pub governing_rate_mpy: f64,

    /// Remaining life from the representative reading (years)
    pub remaining_life_years: Option<f64>,

    /// Scan statistics, when scan readings were supplied
    pub scan_summary: Option<FloorScanSummary>,
}

/// Evaluate a floor plate record.
pub fn calculate(input: &FloorInput, config: &CalcConfig) -> CalcResult<FloorResult> {
    input.validate()?;

    let t_min = config.code_minimum_floor_thickness_in;

    let measured_rate = corrosion_rate_mpy(
        input.original_thickness_in,
        input.actual_thickness_in,
        input.age_years,
    );
    let operator_rate = input.operator_rate_mpy();
    let governing_rate = operator_rate
        .map(|r| r.max(measured_rate))
        .unwrap_or(measured_rate);

    let remaining_life =
        remaining_life_years(input.actual_thickness_in, t_min, governing_rate, config);

    let scan_summary = if input.scan_readings_in.is_empty() {
        None
    } else {
        let count = input.scan_readings_in.len();
        let average = input.scan_readings_in.iter().sum::<f64>() / count as f64;
        let minimum = input
            .scan_readings_in
            .iter()
            .cloned()
            .fold(f64::MAX, f64::min);

        Some(FloorScanSummary {
            average_thickness_in: average,
            minimum_thickness_in: minimum,
            remaining_life_from_average_years: remaining_life_years(
                average,
                t_min,
                governing_rate,
                config,
            ),
            remaining_life_from_minimum_years: remaining_life_years(
                minimum,
                t_min,
                governing_rate,
                config,
            ),
            count,
        })
    };

    Ok(FloorResult {
        minimum_thickness_in: t_min,
        measured_rate_mpy: measured_rate,
        operator_rate_mpy: operator_rate,
        governing_rate_mpy: governing_rate,
        remaining_life_years: remaining_life,
        scan_summary,
    })
}
