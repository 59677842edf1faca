//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    home::{analyze_submit, home_page},
    report::report_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",        get(home_page))
        .route("/analyze", post(analyze_submit))
        .route("/report",  get(report_page))

        // Ops
        .route("/healthz", get(healthz))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "message": "Stitchwise is running!" }))
}
