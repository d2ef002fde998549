use crate::constants::MSG_COMPARISON_OK;
use crate::error::{AppError, Result};
use crate::models::{CompareResponse, Notification, PreferenceForm};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/compare
/// Compare the toll route against the toll-free route for the submitted form
pub async fn compare_routes(
    State(state): State<Arc<AppState>>,
    Json(form): Json<PreferenceForm>,
) -> Result<Json<CompareResponse>> {
    let inputs = form.validate().map_err(AppError::Validation)?;
    let currency = form
        .currency_or(state.preferences.default_currency())
        .map_err(AppError::InvalidRequest)?;

    let comparison = inputs.compare().map_err(AppError::Validation)?;

    tracing::info!(
        vehicle_type = %form.vehicle_type,
        toll_route_cost = comparison.toll_route_cost,
        toll_free_route_cost = comparison.toll_free_route_cost,
        toll_route_cheaper = comparison.is_toll_route_cheaper,
        "Route comparison: {} cheaper by {} {:.2}",
        comparison.cheaper_route_label(),
        currency,
        comparison.savings
    );

    Ok(Json(CompareResponse::new(
        &inputs,
        comparison,
        currency,
        Notification::success(MSG_COMPARISON_OK),
    )))
}
