use crate::models::{CurrencyCode, VehicleType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Last-used calculator inputs, persisted insert-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutePreference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub vehicle_type: VehicleType,
    /// Distance per fuel unit (km/L)
    pub fuel_efficiency: f64,
    /// Currency per fuel unit
    pub fuel_cost: f64,
    pub toll_route_distance: f64,
    pub toll_free_route_distance: f64,
    /// One-way toll charge
    pub toll_cost: f64,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl RoutePreference {
    /// Invariants for a stored record: positive finite distances, efficiency
    /// and fuel price; non-negative toll.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("fuel_efficiency", self.fuel_efficiency),
            ("fuel_cost", self.fuel_cost),
            ("toll_route_distance", self.toll_route_distance),
            ("toll_free_route_distance", self.toll_free_route_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if !self.toll_cost.is_finite() || self.toll_cost < 0.0 {
            return Err(format!(
                "toll_cost must be zero or positive, got {}",
                self.toll_cost
            ));
        }
        Ok(())
    }

    /// Copy of this record as the store returns it after an insert
    pub fn stored(&self, id: Uuid, created_at: OffsetDateTime) -> Self {
        RoutePreference {
            id: Some(id),
            created_at: Some(created_at),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoutePreference {
        RoutePreference {
            id: None,
            vehicle_type: VehicleType::Car,
            fuel_efficiency: 10.0,
            fuel_cost: 1.5,
            toll_route_distance: 30.0,
            toll_free_route_distance: 45.0,
            toll_cost: 5.0,
            currency: CurrencyCode::default(),
            created_at: None,
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_allows_zero_toll_at_rest() {
        let mut pref = sample();
        pref.toll_cost = 0.0;
        assert!(pref.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_and_non_finite() {
        let mut pref = sample();
        pref.fuel_efficiency = 0.0;
        assert!(pref.validate().is_err());

        let mut pref = sample();
        pref.toll_free_route_distance = f64::NAN;
        assert!(pref.validate().is_err());

        let mut pref = sample();
        pref.toll_cost = -1.0;
        assert!(pref.validate().is_err());
    }

    #[test]
    fn test_deserialize_store_row() {
        let row = serde_json::json!({
            "id": "7d4c2b9e-8f6a-4c1d-9e2b-3a5f6c7d8e9f",
            "vehicle_type": "motorcycle",
            "fuel_efficiency": 25,
            "fuel_cost": 2.91,
            "toll_route_distance": 30,
            "toll_free_route_distance": 45.5,
            "toll_cost": 4,
            "currency": "AED",
            "created_at": "2024-05-01T10:15:30.123456+00:00"
        });

        let pref: RoutePreference = serde_json::from_value(row).unwrap();
        assert_eq!(pref.vehicle_type, VehicleType::Motorcycle);
        assert_eq!(pref.fuel_efficiency, 25.0);
        assert_eq!(pref.toll_free_route_distance, 45.5);
        assert!(pref.created_at.is_some());
    }

    #[test]
    fn test_missing_currency_defaults_to_aed() {
        let row = serde_json::json!({
            "vehicle_type": "car",
            "fuel_efficiency": 10,
            "fuel_cost": 1.5,
            "toll_route_distance": 30,
            "toll_free_route_distance": 45,
            "toll_cost": 5
        });

        let pref: RoutePreference = serde_json::from_value(row).unwrap();
        assert_eq!(pref.currency.as_str(), "AED");
        assert!(pref.id.is_none());
    }
}
