//! HTTP surface for the calculator.
//!
//! Provides three endpoints:
//! - `GET /reference`: every reference table, in display order
//! - `POST /calculate`: form-encoded calculator submission
//! - `POST /calculate/json`: JSON [`CalcInput`](crate::calc::types::CalcInput)

mod handlers;
pub mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use types::ReferenceResponse;

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; no locks needed since the
/// engine is pure and the reference data never changes.
pub struct AppState {
    /// Pre-rendered reference table listing.
    pub reference: ReferenceResponse,
}

impl AppState {
    /// Builds the state from the static reference tables.
    pub fn new() -> Self {
        Self {
            reference: ReferenceResponse::from_tables(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reference", get(handlers::get_reference))
        .route("/calculate", post(handlers::post_calculate_form))
        .route("/calculate/json", post(handlers::post_calculate_json))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
