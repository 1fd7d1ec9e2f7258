//! Entry point for the ERP Engine binary.
//!
//! Running this binary will start an HTTP server that exposes the
//! engine's endpoints.  The JSON file seeding the permissions table
//! may be specified via the `ERP_PERMISSIONS_PATH` environment
//! variable; if unset the server looks for `permissions.json` in the
//! current working directory.

use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    // Determine where the permissions seed file is located
    let permissions_path = std::env::var("ERP_PERMISSIONS_PATH")
        .unwrap_or_else(|_| "permissions.json".to_string());
    // Determine bind address
    let addr = std::env::var("ERP_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    if let Err(err) = erp_engine::api::serve(&addr, PathBuf::from(permissions_path)).await {
        tracing::error!("error running server: {err}");
    }
}
