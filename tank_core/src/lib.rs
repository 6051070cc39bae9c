//! # tank_core - Tank Inspection Calculation Engine
//!
//! `tank_core` is the calculation heart of an API 653 atmospheric
//! storage tank inspection application. It consumes normalized tank,
//! course, and measurement data and produces the derived engineering
//! quantities (minimum thickness, corrosion rate, remaining life,
//! settlement tilt) the surrounding web application persists and
//! renders.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculator is a pure function of its explicit
//!   inputs plus a [`config::CalcConfig`]; no I/O, no ambient state
//! - **JSON-First**: all inputs and results implement Serialize /
//!   Deserialize for clean round-trips through the host's forms and
//!   database
//! - **Sentinels over panics**: domain edge cases (zero age, zero rate,
//!   sparse surveys) produce documented sentinel values; errors are
//!   reserved for malformed input and always name the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use tank_core::config::CalcConfig;
//! use tank_core::corrosion::{CmlInput, evaluate};
//!
//! let cml = CmlInput {
//!     label: "CML-4".to_string(),
//!     previous_thickness_in: 0.500,
//!     current_thickness_in: 0.485,
//!     elapsed_years: 10.0,
//!     minimum_required_in: 0.200,
//! };
//!
//! let result = evaluate(&cml, &CalcConfig::default()).unwrap();
//! assert!((result.corrosion_rate_mpy - 1.5).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Shell, roof, floor, and settlement calculators
//! - [`corrosion`] - Generic CML corrosion rate / remaining life model
//! - [`piping`] - Nozzle t-min schedule lookup table
//! - [`stats`] - Corrosion rate roll-up statistics
//! - [`report`] - Report container and whole-report recalculation
//! - [`config`] - Standards constants passed into each calculator call
//! - [`numeric`] - Form field parsing and rounding rules
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod corrosion;
pub mod errors;
pub mod numeric;
pub mod piping;
pub mod report;
pub mod stats;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::{CalcConfig, CorrosionAllowance};
pub use errors::{CalcError, CalcResult};
pub use report::{RecordItem, ReportSummary, TankReport};
