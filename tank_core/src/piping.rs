//! # Nozzle Piping t-min Table
//!
//! Nozzle neck minimum thickness comes from a piping thickness standard,
//! not from first principles: a fixed factor per schedule designation,
//! multiplied by nominal pipe size. This is deliberately a lookup table
//! so a standards revision means editing constants, not rederiving a
//! formula.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::config::CalcConfig;
//! use tank_core::piping::{NozzleInput, PipeSchedule, evaluate};
//!
//! let input = NozzleInput {
//!     label: "N-2 product inlet".to_string(),
//!     nominal_pipe_size_in: 6.0,
//!     schedule: PipeSchedule::Sch40,
//!     previous_thickness_in: 0.280,
//!     current_thickness_in: 0.262,
//!     elapsed_years: 12.0,
//! };
//!
//! let result = evaluate(&input, &CalcConfig::default()).unwrap();
//! assert!((result.governing_t_min_in - 0.570).abs() < 1e-9);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::corrosion::{self, CmlInput, CmlResult};
use crate::errors::{CalcError, CalcResult};

/// Standard pipe schedule designations carried on nozzle records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeSchedule {
    Sch10,
    Sch20,
    Sch30,
    /// Standard weight (STD)
    Std,
    Sch40,
    Sch60,
    /// Extra strong (XS)
    Xs,
    Sch80,
    Sch120,
    Sch160,
}

impl PipeSchedule {
    /// All schedules, for iteration and form dropdowns
    pub const ALL: [PipeSchedule; 10] = [
        PipeSchedule::Sch10,
        PipeSchedule::Sch20,
        PipeSchedule::Sch30,
        PipeSchedule::Std,
        PipeSchedule::Sch40,
        PipeSchedule::Sch60,
        PipeSchedule::Xs,
        PipeSchedule::Sch80,
        PipeSchedule::Sch120,
        PipeSchedule::Sch160,
    ];

    /// Schedule factor: fixed constant per designation.
    ///
    /// t-min for a nozzle neck is `nominal pipe size * factor`.
    pub fn factor(&self) -> f64 {
        match self {
            PipeSchedule::Sch10 => 0.035,
            PipeSchedule::Sch20 => 0.050,
            PipeSchedule::Sch30 => 0.065,
            PipeSchedule::Std => 0.090,
            PipeSchedule::Sch40 => 0.095,
            PipeSchedule::Sch60 => 0.119,
            PipeSchedule::Xs => 0.130,
            PipeSchedule::Sch80 => 0.143,
            PipeSchedule::Sch120 => 0.170,
            PipeSchedule::Sch160 => 0.190,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeSchedule::Sch10 => "Sch 10",
            PipeSchedule::Sch20 => "Sch 20",
            PipeSchedule::Sch30 => "Sch 30",
            PipeSchedule::Std => "STD",
            PipeSchedule::Sch40 => "Sch 40",
            PipeSchedule::Sch60 => "Sch 60",
            PipeSchedule::Xs => "XS",
            PipeSchedule::Sch80 => "Sch 80",
            PipeSchedule::Sch120 => "Sch 120",
            PipeSchedule::Sch160 => "Sch 160",
        }
    }
}

impl FromStr for PipeSchedule {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_uppercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "SCH10" | "10" => Ok(PipeSchedule::Sch10),
            "SCH20" | "20" => Ok(PipeSchedule::Sch20),
            "SCH30" | "30" => Ok(PipeSchedule::Sch30),
            "STD" => Ok(PipeSchedule::Std),
            "SCH40" | "40" => Ok(PipeSchedule::Sch40),
            "SCH60" | "60" => Ok(PipeSchedule::Sch60),
            "XS" => Ok(PipeSchedule::Xs),
            "SCH80" | "80" => Ok(PipeSchedule::Sch80),
            "SCH120" | "120" => Ok(PipeSchedule::Sch120),
            "SCH160" | "160" => Ok(PipeSchedule::Sch160),
            _ => Err(CalcError::schedule_not_found(s)),
        }
    }
}

/// Nozzle neck minimum thickness: nominal pipe size times the schedule
/// factor.
pub fn nozzle_t_min(nominal_pipe_size_in: f64, schedule: PipeSchedule) -> CalcResult<f64> {
    if nominal_pipe_size_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "nominal_pipe_size_in",
            nominal_pipe_size_in.to_string(),
            "Nominal pipe size must be positive",
        ));
    }
    Ok(nominal_pipe_size_in * schedule.factor())
}

/// Input for a nozzle neck corrosion record.
///
/// Identical to a generic CML except t-min is derived from the schedule
/// table instead of user-entered.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "N-2 product inlet",
///   "nominal_pipe_size_in": 6.0,
///   "schedule": "Sch40",
///   "previous_thickness_in": 0.280,
///   "current_thickness_in": 0.262,
///   "elapsed_years": 12.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NozzleInput {
    /// User label for this nozzle (e.g., "N-2 product inlet")
    pub label: String,

    /// Nominal pipe size (in)
    pub nominal_pipe_size_in: f64,

    /// Pipe schedule designation
    pub schedule: PipeSchedule,

    /// Previous-survey (or nominal) wall thickness (in)
    pub previous_thickness_in: f64,

    /// Current measured wall thickness (in)
    pub current_thickness_in: f64,

    /// Years between the two readings
    pub elapsed_years: f64,
}

/// Evaluate a nozzle neck record.
///
/// Derives t-min from the schedule table, then applies the generic
/// corrosion model.
pub fn evaluate(input: &NozzleInput, config: &CalcConfig) -> CalcResult<CmlResult> {
    let t_min = nozzle_t_min(input.nominal_pipe_size_in, input.schedule)?;

    let cml = CmlInput {
        label: input.label.clone(),
        previous_thickness_in: input.previous_thickness_in,
        current_thickness_in: input.current_thickness_in,
        elapsed_years: input.elapsed_years,
        minimum_required_in: t_min,
    };
    corrosion::evaluate(&cml, config)
}
