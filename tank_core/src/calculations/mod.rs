//! # Inspection Calculations
//!
//! Geometry-aware calculators for the tank components. Each follows the
//! same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `(input, &CalcConfig) -> CalcResult<*Result>`
//!
//! Geometry-independent corrosion arithmetic lives in
//! [`crate::corrosion`]; everything here delegates to it for rates and
//! remaining life.
//!
//! ## Available Calculations
//!
//! - [`shell`] - Per-course shell thickness (API 653 one-foot method)
//! - [`roof`] - Roof deck plate minimums
//! - [`floor`] - Floor plate with soil/product sides and scan data
//! - [`settlement`] - Foundation settlement and planar tilt

pub mod floor;
pub mod roof;
pub mod settlement;
pub mod shell;

pub use floor::{FloorInput, FloorResult};
pub use roof::{RoofInput, RoofResult, RoofSupport};
pub use settlement::{ElevationPoint, SettlementInput, SettlementResult};
pub use shell::{FluidColumn, ShellCourse, ShellInput, ShellResult, TankGeometry};
