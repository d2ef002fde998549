use crate::constants::FUEL_PRESETS;
use crate::models::currency::{supported_currencies, CurrencyOption};
use crate::models::PreferenceForm;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelPreset {
    pub name: &'static str,
    /// Price per litre, as the form text
    pub price: &'static str,
}

/// GET /reference/currencies
pub async fn currencies() -> Json<Vec<CurrencyOption>> {
    Json(supported_currencies())
}

/// GET /reference/fuel-types
pub async fn fuel_types() -> Json<Vec<FuelPreset>> {
    Json(
        FUEL_PRESETS
            .iter()
            .map(|&(name, price)| FuelPreset { name, price })
            .collect(),
    )
}

/// GET /reference/defaults - initial form values
pub async fn defaults() -> Json<PreferenceForm> {
    Json(PreferenceForm::default())
}
