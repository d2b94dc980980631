//! Age-gate verification service
//!
//! Accepts a base64 data-URI webcam capture, persists it best-effort through
//! an ordered list of storage tiers, and returns an adult/minor verdict from
//! a pluggable classifier. The shipped classifier is a stand-in coin flip; a
//! real estimator replaces it behind the same trait without touching intake
//! or transport.

pub mod classifier;
pub mod constants;
pub mod error;
pub mod intake;
pub mod models;
pub mod routes;
pub mod storage;
pub mod verification;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use classifier::AgeClassifier;
use storage::ImageStore;

/// Shared application state. Immutable per request; no coordination between
/// in-flight submissions.
pub struct AppState {
    pub store: ImageStore,
    pub classifier: Arc<dyn AgeClassifier>,
}

/// Build the application router around shared state.
pub fn build_router(state: Arc<AppState>, body_limit: usize) -> Router {
    routes::build_routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
