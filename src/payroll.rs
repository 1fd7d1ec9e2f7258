//! Payroll aggregation.
//!
//! The `payroll` module folds one person's month of attendance
//! intervals into worked days, worked hours and a salary figure, and
//! offers a batch pay-run that processes many employees at once.  The
//! batch path uses the [`rayon`] crate to parallelise per-employee
//! computation across CPU cores; each employee's computation is pure
//! and independent, so no coordination is needed.

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeePayResult, PayRunInput, PayRunResult, PayrollInput, PayrollResult};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeSet;

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Computes a month's payroll figures from attendance intervals.
///
/// A calendar day counts as worked when it has at least one check-in,
/// whether or not the matching check-out ever arrived; only closed
/// intervals contribute hours.  Basic salary is worked days times the
/// daily rate, net salary adds the bonus and subtracts the
/// deductions.  Net salary is deliberately not clamped at zero:
/// whether deductions may exceed a month's pay is a product decision
/// the engine does not make.
///
/// Negative `daily_rate`, `bonus` or `deductions` fail with
/// [`EngineError::InvalidRate`].
pub fn compute_payroll(input: &PayrollInput) -> EngineResult<PayrollResult> {
    for (field, value) in [
        ("daily_rate", input.daily_rate),
        ("bonus", input.bonus),
        ("deductions", input.deductions),
    ] {
        if value < 0.0 {
            return Err(EngineError::InvalidRate { field, value });
        }
    }

    let worked_dates: BTreeSet<NaiveDate> = input
        .intervals
        .iter()
        .map(|interval| interval.check_in.date_naive())
        .collect();
    let worked_days = worked_dates.len() as u32;

    let worked_hours: f64 = input
        .intervals
        .iter()
        .filter_map(|interval| {
            interval
                .check_out
                .map(|out| (out - interval.check_in).num_seconds() as f64 / SECONDS_PER_HOUR)
        })
        .sum();

    let basic_salary = f64::from(worked_days) * input.daily_rate;
    let net_salary = basic_salary + input.bonus - input.deductions;

    Ok(PayrollResult {
        worked_days,
        worked_hours,
        basic_salary,
        net_salary,
    })
}

/// Runs payroll for every employee in a batch.
///
/// Entries are computed in parallel and results come back in input
/// order.  A validation failure for one employee lands in that
/// employee's result slot instead of aborting the run, so one bad
/// rate does not hold up an entire month's payslips.
pub fn run_pay_run(input: PayRunInput) -> PayRunResult {
    let results: Vec<EmployeePayResult> = input
        .entries
        .into_par_iter()
        .map(|entry| match compute_payroll(&entry.input) {
            Ok(payroll) => EmployeePayResult {
                employee_id: entry.employee_id,
                payroll: Some(payroll),
                error: None,
            },
            Err(err) => EmployeePayResult {
                employee_id: entry.employee_id,
                payroll: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    PayRunResult {
        month: input.month,
        results,
    }
}
