//! # Report Data Structures
//!
//! The `TankReport` struct is the root container the host application
//! round-trips to its database: report metadata, the engine
//! configuration in force, and a flat UUID-keyed map of inspection
//! records. `recalculate` re-derives every record fresh; results are
//! never cached or mutated in place, so the host persists a snapshot of
//! whatever it wants to keep.
//!
//! ## Structure
//!
//! ```text
//! TankReport
//! ├── meta: ReportMetadata (version, inspector, tank, timestamps)
//! ├── config: CalcConfig (standards constants in force)
//! └── records: HashMap<Uuid, RecordItem> (all inspection records)
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::floor::{self, FloorInput, FloorResult};
use crate::calculations::roof::{self, RoofInput, RoofResult};
use crate::calculations::settlement::{self, SettlementInput, SettlementResult};
use crate::calculations::shell::{self, ShellInput, ShellResult};
use crate::config::CalcConfig;
use crate::corrosion::{self, CmlInput, CmlResult};
use crate::errors::CalcResult;
use crate::piping::{self, NozzleInput};
use crate::stats::{corrosion_rate_stats, CorrosionRateStats};

/// Current schema version for serialized reports
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Enum wrapper for all inspection record types.
///
/// Allows heterogeneous records in a single collection with clean tagged
/// serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordItem {
    /// Full shell course set
    Shell(ShellInput),
    /// Roof deck plate
    Roof(RoofInput),
    /// Floor plate
    Floor(FloorInput),
    /// Generic corrosion monitoring location
    Cml(CmlInput),
    /// Nozzle neck with table-derived t-min
    Nozzle(NozzleInput),
    /// Elevation survey
    Settlement(SettlementInput),
}

impl RecordItem {
    /// Get the user-provided label for this record
    pub fn label(&self) -> &str {
        match self {
            RecordItem::Shell(r) => &r.label,
            RecordItem::Roof(r) => &r.label,
            RecordItem::Floor(r) => &r.label,
            RecordItem::Cml(r) => &r.label,
            RecordItem::Nozzle(r) => &r.label,
            RecordItem::Settlement(r) => &r.label,
        }
    }

    /// Get the record type as a string
    pub fn record_type(&self) -> &'static str {
        match self {
            RecordItem::Shell(_) => "Shell",
            RecordItem::Roof(_) => "Roof",
            RecordItem::Floor(_) => "Floor",
            RecordItem::Cml(_) => "CML",
            RecordItem::Nozzle(_) => "Nozzle",
            RecordItem::Settlement(_) => "Settlement",
        }
    }
}

/// Computed results for one record, tagged like [`RecordItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordResult {
    Shell(ShellResult),
    Roof(RoofResult),
    Floor(FloorResult),
    Cml(CmlResult),
    Nozzle(CmlResult),
    Settlement(SettlementResult),
}

impl RecordResult {
    /// Corrosion rates this record contributes to the report roll-up
    fn corrosion_rates_mpy(&self) -> Vec<f64> {
        match self {
            RecordResult::Shell(r) => {
                r.courses.iter().map(|c| c.corrosion_rate_mpy).collect()
            }
            RecordResult::Roof(r) => vec![r.corrosion_rate_mpy],
            RecordResult::Floor(r) => vec![r.governing_rate_mpy],
            RecordResult::Cml(r) | RecordResult::Nozzle(r) => vec![r.corrosion_rate_mpy],
            RecordResult::Settlement(_) => Vec::new(),
        }
    }

    /// The shortest finite remaining life this record reports
    fn worst_remaining_life_years(&self) -> Option<f64> {
        match self {
            RecordResult::Shell(r) => r.governing_remaining_life_years(),
            RecordResult::Roof(r) => r.remaining_life_years,
            RecordResult::Floor(r) => {
                let from_scans = r
                    .scan_summary
                    .as_ref()
                    .and_then(|s| s.remaining_life_from_minimum_years);
                match (r.remaining_life_years, from_scans) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                }
            }
            RecordResult::Cml(r) | RecordResult::Nozzle(r) => r.remaining_life_years,
            RecordResult::Settlement(_) => None,
        }
    }
}

/// Report metadata stored alongside the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible inspector
    pub inspector: String,

    /// Tank identifier (e.g., "TK-101")
    pub tank_id: String,

    /// Owner/operator name
    pub owner: String,

    /// When the report was created
    pub created: DateTime<Utc>,

    /// When the report was last modified
    pub modified: DateTime<Utc>,
}

/// Report-wide roll-up produced by [`TankReport::recalculate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Per-record results keyed by record UUID
    pub results: HashMap<Uuid, RecordResult>,

    /// Statistics over every corrosion rate the records produced
    pub corrosion_rates: CorrosionRateStats,

    /// Shortest finite remaining life across all records (years);
    /// `None` when every record reports an unbounded life
    pub governing_remaining_life_years: Option<f64>,
}

/// Root report container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankReport {
    /// Report metadata (version, inspector, tank info)
    pub meta: ReportMetadata,

    /// Engine configuration in force for this report
    pub config: CalcConfig,

    /// All inspection records, keyed by UUID
    pub records: HashMap<Uuid, RecordItem>,
}

impl TankReport {
    /// Create a new empty report.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tank_core::report::TankReport;
    ///
    /// let report = TankReport::new("J. Inspector", "TK-101", "Acme Terminals");
    /// assert_eq!(report.meta.tank_id, "TK-101");
    /// ```
    pub fn new(
        inspector: impl Into<String>,
        tank_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        TankReport {
            meta: ReportMetadata {
                version: SCHEMA_VERSION.to_string(),
                inspector: inspector.into(),
                tank_id: tank_id.into(),
                owner: owner.into(),
                created: now,
                modified: now,
            },
            config: CalcConfig::default(),
            records: HashMap::new(),
        }
    }

    /// Add an inspection record. Returns the UUID assigned to it.
    pub fn add_record(&mut self, record: RecordItem) -> Uuid {
        let id = Uuid::new_v4();
        self.records.insert(id, record);
        self.touch();
        id
    }

    /// Remove a record by UUID, returning it if it existed.
    pub fn remove_record(&mut self, id: &Uuid) -> Option<RecordItem> {
        let record = self.records.remove(id);
        if record.is_some() {
            self.touch();
        }
        record
    }

    /// Get a record by UUID.
    pub fn get_record(&self, id: &Uuid) -> Option<&RecordItem> {
        self.records.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of records in the report.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Recompute every record from scratch.
    ///
    /// Fails on the first record with invalid input; the error names the
    /// offending field. A report with no records yields an empty summary
    /// with all-zero statistics.
    pub fn recalculate(&self) -> CalcResult<ReportSummary> {
        let mut results = HashMap::with_capacity(self.records.len());
        let mut rates = Vec::new();
        let mut governing_life: Option<f64> = None;

        for (id, record) in &self.records {
            let result = match record {
                RecordItem::Shell(input) => {
                    RecordResult::Shell(shell::calculate(input, &self.config)?)
                }
                RecordItem::Roof(input) => {
                    RecordResult::Roof(roof::calculate(input, &self.config)?)
                }
                RecordItem::Floor(input) => {
                    RecordResult::Floor(floor::calculate(input, &self.config)?)
                }
                RecordItem::Cml(input) => {
                    RecordResult::Cml(corrosion::evaluate(input, &self.config)?)
                }
                RecordItem::Nozzle(input) => {
                    RecordResult::Nozzle(piping::evaluate(input, &self.config)?)
                }
                RecordItem::Settlement(input) => {
                    RecordResult::Settlement(settlement::analyze(input, &self.config)?)
                }
            };

            rates.extend(result.corrosion_rates_mpy());
            if let Some(life) = result.worst_remaining_life_years() {
                governing_life = Some(governing_life.map_or(life, |g: f64| g.min(life)));
            }
            results.insert(*id, result);
        }

        Ok(ReportSummary {
            results,
            corrosion_rates: corrosion_rate_stats(&rates),
            governing_remaining_life_years: governing_life,
        })
    }
}
