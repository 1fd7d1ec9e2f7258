//! ERP Engine library crate.
//!
//! This crate exposes the computational core of a back-office suite
//! as reusable modules: geofenced attendance evaluation, role-based
//! permission resolution, payroll aggregation, tabular sort and
//! pagination, and import column mapping.  External applications may
//! depend on the `erp_engine` crate and call the pure functions
//! directly or embed the API via `api::build_router`.

pub mod api;
pub mod error;
pub mod geofence;
pub mod models;
pub mod payroll;
pub mod permissions;
pub mod schema;
pub mod table;
