//! Fuel and toll cost arithmetic.
//!
//! All functions are pure. Inputs are expected to be validated (positive,
//! finite) by the caller; a zero `fuel_efficiency` yields a non-finite cost.
//! Nothing is rounded here.

use crate::models::RouteComparison;

/// Fuel spend for a distance: `(distance / fuel_efficiency) * fuel_cost`
fn fuel_spend(distance: f64, fuel_efficiency: f64, fuel_cost: f64) -> f64 {
    let fuel_amount = distance / fuel_efficiency;
    fuel_amount * fuel_cost
}

/// Total cost of the toll route: fuel spend plus the toll
pub fn calculate_toll_route_cost(
    distance: f64,
    fuel_efficiency: f64,
    fuel_cost: f64,
    toll_cost: f64,
) -> f64 {
    fuel_spend(distance, fuel_efficiency, fuel_cost) + toll_cost
}

/// Total cost of the toll-free route: fuel spend only
pub fn calculate_toll_free_route_cost(distance: f64, fuel_efficiency: f64, fuel_cost: f64) -> f64 {
    fuel_spend(distance, fuel_efficiency, fuel_cost)
}

pub fn compare_routes(
    toll_route_distance: f64,
    toll_free_route_distance: f64,
    fuel_efficiency: f64,
    fuel_cost: f64,
    toll_cost: f64,
) -> RouteComparison {
    let toll_route_cost =
        calculate_toll_route_cost(toll_route_distance, fuel_efficiency, fuel_cost, toll_cost);
    let toll_free_route_cost =
        calculate_toll_free_route_cost(toll_free_route_distance, fuel_efficiency, fuel_cost);

    let difference = (toll_route_cost - toll_free_route_cost).abs();

    tracing::debug!(
        toll_route_cost,
        toll_free_route_cost,
        difference,
        "Compared routes: toll {:.2} vs toll-free {:.2}",
        toll_route_cost,
        toll_free_route_cost
    );

    RouteComparison {
        toll_route_cost,
        toll_free_route_cost,
        difference,
        is_toll_route_cheaper: toll_route_cost < toll_free_route_cost,
        savings: difference,
    }
}
