use crate::constants::*;
use crate::models::{CurrencyCode, RouteComparison, RoutePreference, VehicleType};
use crate::services::cost_calculator;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Calculator inputs as the form holds them: numbers are kept as text.
///
/// Numeric fields accept either JSON strings or JSON numbers; a missing or
/// `null` field deserializes to an empty string and is reported by
/// [`PreferenceForm::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreferenceForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub vehicle_type: VehicleType,
    #[serde(default, deserialize_with = "field_text")]
    pub fuel_efficiency: String,
    #[serde(default, deserialize_with = "field_text")]
    pub fuel_cost: String,
    #[serde(default, deserialize_with = "field_text")]
    pub toll_route_distance: String,
    #[serde(default, deserialize_with = "field_text")]
    pub toll_free_route_distance: String,
    #[serde(default, deserialize_with = "field_text")]
    pub toll_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldText {
    Text(String),
    Number(f64),
}

fn field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FieldText>::deserialize(deserializer)? {
        Some(FieldText::Text(text)) => text,
        Some(FieldText::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Parsed, validated calculator inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteInputs {
    pub fuel_efficiency: f64,
    pub fuel_cost: f64,
    pub toll_route_distance: f64,
    pub toll_free_route_distance: f64,
    pub toll_cost: f64,
}

impl RouteInputs {
    /// Compare both routes; fails when the totals overflow to a non-finite value
    pub fn compare(&self) -> Result<RouteComparison, String> {
        let comparison = cost_calculator::compare_routes(
            self.toll_route_distance,
            self.toll_free_route_distance,
            self.fuel_efficiency,
            self.fuel_cost,
            self.toll_cost,
        );

        if comparison.is_finite() {
            Ok(comparison)
        } else {
            Err(MSG_COST_OUT_OF_RANGE.to_string())
        }
    }
}

/// A field value is usable when it parses to a finite number above zero.
fn parse_positive(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

impl Default for PreferenceForm {
    fn default() -> Self {
        PreferenceForm {
            id: None,
            vehicle_type: VehicleType::default(),
            fuel_efficiency: DEFAULT_FUEL_EFFICIENCY.to_string(),
            fuel_cost: DEFAULT_FUEL_COST.to_string(),
            toll_route_distance: DEFAULT_TOLL_ROUTE_DISTANCE.to_string(),
            toll_free_route_distance: DEFAULT_TOLL_FREE_ROUTE_DISTANCE.to_string(),
            toll_cost: DEFAULT_TOLL_COST.to_string(),
            currency: Some(DEFAULT_CURRENCY.to_string()),
        }
    }
}

impl PreferenceForm {
    /// Numeric fields with their user-facing labels, in form order
    fn labelled_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Fuel efficiency", self.fuel_efficiency.as_str()),
            ("Fuel cost", self.fuel_cost.as_str()),
            ("Toll route distance", self.toll_route_distance.as_str()),
            ("Toll-free route distance", self.toll_free_route_distance.as_str()),
            ("Toll cost", self.toll_cost.as_str()),
        ]
    }

    /// Labels of every field that is empty, unparsable or not above zero
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.labelled_fields()
            .iter()
            .filter(|(_, value)| parse_positive(value).is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn validate(&self) -> Result<RouteInputs, String> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(format!(
                "Please enter valid values for: {}",
                invalid.join(", ")
            ));
        }

        let [fuel_efficiency, fuel_cost, toll_route_distance, toll_free_route_distance, toll_cost] =
            self.labelled_fields()
                .map(|(_, value)| parse_positive(value).unwrap_or_default());

        Ok(RouteInputs {
            fuel_efficiency,
            fuel_cost,
            toll_route_distance,
            toll_free_route_distance,
            toll_cost,
        })
    }

    /// Currency of this form, or `default` when the form leaves it blank
    pub fn currency_or(&self, default: &CurrencyCode) -> Result<CurrencyCode, String> {
        match self.currency.as_deref().map(str::trim) {
            None | Some("") => Ok(default.clone()),
            Some(code) => CurrencyCode::new(code),
        }
    }

    pub fn to_preference(&self, default_currency: &CurrencyCode) -> Result<RoutePreference, String> {
        let inputs = self.validate()?;
        Ok(RoutePreference {
            id: None,
            vehicle_type: self.vehicle_type,
            fuel_efficiency: inputs.fuel_efficiency,
            fuel_cost: inputs.fuel_cost,
            toll_route_distance: inputs.toll_route_distance,
            toll_free_route_distance: inputs.toll_free_route_distance,
            toll_cost: inputs.toll_cost,
            currency: self.currency_or(default_currency)?,
            created_at: None,
        })
    }
}

impl From<&RoutePreference> for PreferenceForm {
    // f64 Display is the shortest text that parses back to the same value
    fn from(pref: &RoutePreference) -> Self {
        PreferenceForm {
            id: pref.id,
            vehicle_type: pref.vehicle_type,
            fuel_efficiency: pref.fuel_efficiency.to_string(),
            fuel_cost: pref.fuel_cost.to_string(),
            toll_route_distance: pref.toll_route_distance.to_string(),
            toll_free_route_distance: pref.toll_free_route_distance.to_string(),
            toll_cost: pref.toll_cost.to_string(),
            currency: Some(pref.currency.to_string()),
        }
    }
}
