//! Data models for the ERP Engine.
//!
//! The `models` module defines a set of serialisable structs and
//! enums representing coordinates, attendance intervals, payroll
//! inputs and outputs, and tabular view parameters.  These data
//! types derive `Serialize` and `Deserialize` so that they can be
//! easily persisted or transmitted over a network.  They form the
//! basis of the engine's input and output structures.
//!
//! Every entity here is owned by the caller: the engine constructs
//! results fresh on each invocation and holds no state between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
///
/// Valid latitudes lie in `[-90, 90]` and valid longitudes in
/// `[-180, 180]`.  The geofence evaluator rejects values outside
/// those ranges; nothing else in the engine inspects coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// True when both components are inside their valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.abs() <= 90.0 && self.longitude.abs() <= 180.0
    }
}

/// Outcome of a geofence evaluation.  Derived on each call and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceResult {
    /// Great-circle distance between the evaluated point and the
    /// geofence centre, in meters.
    pub distance_meters: f64,
    /// Whether the point lies within the allowed radius.  The boundary
    /// is inclusive: a distance exactly equal to the radius counts as
    /// within range.
    pub within_range: bool,
}

/// A single attendance record: one check-in, optionally closed by a
/// check-out.  An interval with no check-out is "open" and contributes
/// zero hours to payroll until it is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttendanceInterval {
    pub check_in: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<DateTime<Utc>>,
}

impl AttendanceInterval {
    /// An interval is closed once a check-out has been recorded.
    pub fn is_closed(&self) -> bool {
        self.check_out.is_some()
    }
}

/// Input to a payroll computation for one person over one calendar
/// month.  The caller is responsible for restricting `intervals` to
/// that person and month; the engine does not cross-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Attendance intervals in chronological order.
    pub intervals: Vec<AttendanceInterval>,
    /// Pay per worked day, in the ledger currency.
    pub daily_rate: f64,
    /// Additional pay for the month.  Defaults to zero when omitted.
    #[serde(default)]
    pub bonus: f64,
    /// Amount withheld for the month.  Defaults to zero when omitted.
    #[serde(default)]
    pub deductions: f64,
}

/// The result of a payroll computation for a single person.
///
/// Monetary fields carry full precision; rounding is left to the
/// formatting layer.  `worked_hours` likewise keeps full precision,
/// with [`PayrollResult::display_hours`] providing the whole-hour
/// figure shown on payslips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Number of distinct calendar days with at least one check-in.
    pub worked_days: u32,
    /// Hours accumulated over closed intervals.
    pub worked_hours: f64,
    /// `worked_days` × daily rate.
    pub basic_salary: f64,
    /// `basic_salary` + bonus − deductions.  Not clamped at zero.
    pub net_salary: f64,
}

impl PayrollResult {
    /// Worked hours rounded to the nearest whole hour, for display.
    pub fn display_hours(&self) -> i64 {
        self.worked_hours.round() as i64
    }
}

/// Input to a batch pay-run: one month of attendance per employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRunInput {
    /// The calendar month being processed, as `YYYY-MM`.  Carried
    /// through to the result unchanged.
    pub month: String,
    /// Per-employee payroll inputs.  Result order matches input order.
    pub entries: Vec<PayRunEntry>,
}

/// A single employee's slot in a batch pay-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRunEntry {
    /// A unique identifier for the employee.  This could be a UUID or
    /// any unique string used by your organisation.
    pub employee_id: String,
    pub input: PayrollInput,
}

/// Per-employee outcome of a batch pay-run.  A validation failure for
/// one employee is recorded here rather than aborting the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayResult {
    pub employee_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payroll: Option<PayrollResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The aggregate result of a batch pay-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRunResult {
    /// The month that was processed.
    pub month: String,
    /// Individual results, one per input entry, in input order.
    pub results: Vec<EmployeePayResult>,
}

/// Direction of a tabular sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Requests a sort of tabular records by a named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSpec {
    /// Name of the field to sort by, as it appears in the record's
    /// serialised form.
    pub key: String,
    pub direction: SortDirection,
}

/// One page of a tabular view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, at most `page_size` of them.  Empty when
    /// the requested page lies beyond the last one.
    pub items: Vec<T>,
    /// The 1-based page number that was requested.
    pub page_number: usize,
    /// Total number of pages, never less than 1 even for an empty
    /// record set.
    pub total_pages: usize,
}
