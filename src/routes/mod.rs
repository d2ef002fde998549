pub mod compare;
pub mod debug;
pub mod preferences;
pub mod reference;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/compare", post(compare::compare_routes))
        .route("/preferences", post(preferences::save))
        .route("/preferences/latest", get(preferences::load_latest))
        .route("/reference/currencies", get(reference::currencies))
        .route("/reference/fuel-types", get(reference::fuel_types))
        .route("/reference/defaults", get(reference::defaults))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
