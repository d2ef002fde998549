use crate::models::{CurrencyCode, Notification, RouteInputs};
use serde::{Deserialize, Serialize};

/// Outcome of comparing the toll route against the toll-free route.
/// Values are unrounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RouteComparison {
    pub toll_route_cost: f64,
    pub toll_free_route_cost: f64,
    /// Absolute difference between the two totals
    pub difference: f64,
    pub is_toll_route_cheaper: bool,
    /// Same value as `difference`
    pub savings: f64,
}

impl RouteComparison {
    pub fn is_finite(&self) -> bool {
        self.toll_route_cost.is_finite()
            && self.toll_free_route_cost.is_finite()
            && self.difference.is_finite()
    }

    pub fn cheaper_route_label(&self) -> &'static str {
        if self.is_toll_route_cheaper {
            "toll route"
        } else {
            "toll-free route"
        }
    }

    pub fn summary(&self, currency: &CurrencyCode) -> String {
        format!(
            "You save {} {} by taking the {}",
            currency,
            format_amount(self.savings),
            self.cheaper_route_label()
        )
    }
}

/// Two-decimal rendering used for display only
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// One result card per route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteCard {
    pub title: String,
    pub distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_cost: Option<f64>,
    pub total_cost: f64,
    /// `total_cost` rounded for display
    pub total_cost_display: String,
    pub is_toll_route: bool,
    pub is_recommended: bool,
}

impl RouteCard {
    pub fn toll_route(inputs: &RouteInputs, comparison: &RouteComparison) -> Self {
        RouteCard {
            title: "Toll Route".to_string(),
            distance_km: inputs.toll_route_distance,
            toll_cost: Some(inputs.toll_cost),
            total_cost: comparison.toll_route_cost,
            total_cost_display: format_amount(comparison.toll_route_cost),
            is_toll_route: true,
            is_recommended: comparison.is_toll_route_cheaper,
        }
    }

    pub fn toll_free_route(inputs: &RouteInputs, comparison: &RouteComparison) -> Self {
        RouteCard {
            title: "Toll-Free Route".to_string(),
            distance_km: inputs.toll_free_route_distance,
            toll_cost: None,
            total_cost: comparison.toll_free_route_cost,
            total_cost_display: format_amount(comparison.toll_free_route_cost),
            is_toll_route: false,
            is_recommended: !comparison.is_toll_route_cheaper,
        }
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub comparison: RouteComparison,
    pub routes: Vec<RouteCard>,
    pub currency: CurrencyCode,
    pub summary: String,
    pub notification: Notification,
}

impl CompareResponse {
    pub fn new(
        inputs: &RouteInputs,
        comparison: RouteComparison,
        currency: CurrencyCode,
        notification: Notification,
    ) -> Self {
        CompareResponse {
            routes: vec![
                RouteCard::toll_route(inputs, &comparison),
                RouteCard::toll_free_route(inputs, &comparison),
            ],
            summary: comparison.summary(&currency),
            comparison,
            currency,
            notification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_inputs() -> RouteInputs {
        RouteInputs {
            fuel_efficiency: 10.0,
            fuel_cost: 1.5,
            toll_route_distance: 30.0,
            toll_free_route_distance: 45.0,
            toll_cost: 5.0,
        }
    }

    #[test]
    fn test_summary_uses_two_decimals() {
        let comparison = example_inputs().compare().unwrap();
        assert_eq!(
            comparison.summary(&CurrencyCode::default()),
            "You save AED 2.75 by taking the toll-free route"
        );
    }

    #[test]
    fn test_format_amount_rounds_for_display_only() {
        assert_eq!(format_amount(9.5), "9.50");
        assert_eq!(format_amount(1.0 / 3.0), "0.33");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_cards_recommend_cheaper_route() {
        let inputs = RouteInputs {
            toll_route_distance: 10.0,
            toll_free_route_distance: 80.0,
            toll_cost: 1.0,
            ..example_inputs()
        };
        let comparison = inputs.compare().unwrap();
        assert!(comparison.is_toll_route_cheaper);

        let toll = RouteCard::toll_route(&inputs, &comparison);
        let free = RouteCard::toll_free_route(&inputs, &comparison);
        assert!(toll.is_recommended);
        assert!(!free.is_recommended);
        assert_eq!(toll.toll_cost, Some(1.0));
        assert!(free.toll_cost.is_none());
        assert_eq!(comparison.cheaper_route_label(), "toll route");
    }

    #[test]
    fn test_compare_response_shape() {
        let inputs = example_inputs();
        let response = CompareResponse::new(
            &inputs,
            inputs.compare().unwrap(),
            CurrencyCode::new("USD").unwrap(),
            Notification::success("ok"),
        );

        assert_eq!(response.routes.len(), 2);
        assert_eq!(response.routes[0].title, "Toll Route");
        assert_eq!(response.routes[0].total_cost_display, "9.50");
        assert_eq!(response.routes[1].total_cost_display, "6.75");
        assert!(response.routes[1].is_recommended);
        assert_eq!(response.summary, "You save USD 2.75 by taking the toll-free route");
    }
}
