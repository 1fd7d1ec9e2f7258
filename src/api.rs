//! HTTP API for the ERP Engine.
//!
//! This module exposes a minimal REST API around the engine using the
//! [`axum`](https://crates.io/crates/axum) framework.  Each endpoint
//! is a thin wrapper over the corresponding pure function; the only
//! state shared across requests is the live permissions table, held
//! behind a read/write lock so that permission edits replace the
//! table atomically while checks proceed under read locks.

use crate::geofence;
use crate::models::{Coordinate, Page, PayRunInput, SortSpec};
use crate::payroll::run_pay_run;
use crate::permissions::{load_permissions_from_file, PermissionsTable};
use crate::table;
use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across requests.
pub struct AppState {
    pub permissions: RwLock<PermissionsTable>,
}

/// Build the API router and initialise the permissions table from the
/// given JSON file.  Returns the router and a handle to the state.
pub fn build_router(permissions_path: PathBuf) -> Result<(Router, Arc<AppState>)> {
    let table = load_permissions_from_file(&permissions_path)?;
    let state = Arc::new(AppState {
        permissions: RwLock::new(table),
    });
    let router = Router::new()
        .route("/api/geofence/evaluate", post(geofence_handler))
        .route("/api/payroll/run", post(pay_run_handler))
        .route("/api/permissions/check", post(permission_check_handler))
        .route("/api/permissions/toggle", post(permission_toggle_handler))
        .route("/api/table/view", post(table_view_handler))
        .with_state(state.clone());
    Ok((router, state))
}

#[derive(Debug, Deserialize)]
struct GeofenceRequest {
    point: Coordinate,
    center: Coordinate,
    allowed_radius_meters: Option<f64>,
}

/// Handler for POST /api/geofence/evaluate
async fn geofence_handler(Json(req): Json<GeofenceRequest>) -> impl IntoResponse {
    match geofence::evaluate(&req.point, &req.center, req.allowed_radius_meters) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string()),
    }
}

/// Handler for POST /api/payroll/run
///
/// Per-employee validation failures are reported inside the result
/// body, so this endpoint answers 200 for any well-formed input.
async fn pay_run_handler(Json(input): Json<PayRunInput>) -> impl IntoResponse {
    let run = run_pay_run(input);
    (StatusCode::OK, Json(run)).into_response()
}

#[derive(Debug, Deserialize)]
struct PermissionRequest {
    module: String,
    action: String,
    role: String,
}

/// Handler for POST /api/permissions/check
async fn permission_check_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<PermissionRequest>,
) -> impl IntoResponse {
    let table = app_state.permissions.read().await;
    let allowed = table.can_perform(&req.module, &req.action, &req.role);
    Json(serde_json::json!({ "allowed": allowed }))
}

/// Handler for POST /api/permissions/toggle
///
/// Replaces the shared table with the toggled copy and answers with
/// the affected module's entry.  Toggling the Admin role is a no-op
/// by contract, which this endpoint reports as its unchanged state.
async fn permission_toggle_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<PermissionRequest>,
) -> impl IntoResponse {
    let mut table = app_state.permissions.write().await;
    let updated = table.toggle_role(&req.module, &req.action, &req.role);
    *table = updated;
    tracing::info!(
        module = %req.module,
        action = %req.action,
        role = %req.role,
        "permission toggled"
    );
    let entry = table.module(&req.module).cloned().unwrap_or_default();
    Json(entry)
}

#[derive(Debug, Deserialize)]
struct TableViewRequest {
    records: Vec<Value>,
    #[serde(default)]
    sort: Option<SortSpec>,
    #[serde(default = "default_page_number")]
    page_number: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

fn default_page_number() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

/// Handler for POST /api/table/view
async fn table_view_handler(Json(req): Json<TableViewRequest>) -> impl IntoResponse {
    let page: Page<Value> = table::view(&req.records, req.sort.as_ref(), req.page_number, req.page_size);
    Json(page)
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    let body = Json(serde_json::json!({ "error": message }));
    (status, body).into_response()
}

/// Launch the API server.  This function builds the router with the
/// permissions table seeded from `permissions_path` and binds to the
/// supplied address.  It blocks until the server terminates (e.g.
/// when interrupted).
pub async fn serve(addr: &str, permissions_path: PathBuf) -> Result<()> {
    let (router, _state) = build_router(permissions_path)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, router).await.map_err(|e| e.into())
}
