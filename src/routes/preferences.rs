use crate::error::Result;
use crate::models::PreferenceForm;
use crate::services::preference_service::{PreferenceLoad, PreferenceSave};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /preferences/latest
/// Most recently saved inputs; `preference` is null when nothing is stored
/// or the store is unreachable (the latter with an error notification)
pub async fn load_latest(State(state): State<Arc<AppState>>) -> Result<Json<PreferenceLoad>> {
    Ok(Json(state.preferences.load_preferences().await?))
}

/// POST /preferences
/// Append the submitted inputs to the preference store
pub async fn save(
    State(state): State<Arc<AppState>>,
    Json(form): Json<PreferenceForm>,
) -> Result<Json<PreferenceSave>> {
    Ok(Json(state.preferences.save_preferences(&form).await?))
}
