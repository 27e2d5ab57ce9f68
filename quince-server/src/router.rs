//! Router configuration.
//!
//! Routes:
//! - `POST /solve`            - validate and solve one instance
//! - `GET  /executions`       - list recorded executions
//! - `GET  /executions/{id}`  - fetch one recorded execution

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete router over the shared ledger state.
pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/solve", post(handlers::solve))
        .route("/executions", get(handlers::list_executions))
        .route("/executions/{id}", get(handlers::get_execution))
        .with_state(state)
}
