use crate::models::RoutePreference;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::preference_repository::RawPreferenceRow;

pub async fn find_latest_preference(pool: &PgPool) -> Result<Option<RoutePreference>, sqlx::Error> {
    let row = sqlx::query_as::<_, PreferenceRow>(
        r#"
        SELECT id, vehicle_type, fuel_efficiency, fuel_cost,
               toll_route_distance, toll_free_route_distance, toll_cost,
               currency, created_at
        FROM route_preferences
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| row.into_raw().into_preference()))
}

pub async fn insert_preference(
    pool: &PgPool,
    preference: &RoutePreference,
) -> Result<RoutePreference, sqlx::Error> {
    let result: (Uuid, OffsetDateTime) = sqlx::query_as(
        r#"
        INSERT INTO route_preferences (id, vehicle_type, fuel_efficiency, fuel_cost, toll_route_distance, toll_free_route_distance, toll_cost, currency)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, created_at
        "#,
    )
    .bind(preference.id.unwrap_or_else(Uuid::new_v4))
    .bind(preference.vehicle_type.as_str())
    .bind(preference.fuel_efficiency)
    .bind(preference.fuel_cost)
    .bind(preference.toll_route_distance)
    .bind(preference.toll_free_route_distance)
    .bind(preference.toll_cost)
    .bind(preference.currency.as_str())
    .fetch_one(pool)
    .await?;

    Ok(preference.stored(result.0, result.1))
}

pub async fn count_preferences(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM route_preferences")
        .fetch_one(pool)
        .await
}

#[derive(sqlx::FromRow)]
struct PreferenceRow {
    id: Uuid,
    vehicle_type: String,
    fuel_efficiency: f64,
    fuel_cost: f64,
    toll_route_distance: f64,
    toll_free_route_distance: f64,
    toll_cost: f64,
    currency: Option<String>,
    created_at: OffsetDateTime,
}

impl PreferenceRow {
    fn into_raw(self) -> RawPreferenceRow {
        RawPreferenceRow {
            id: self.id,
            vehicle_type: self.vehicle_type,
            fuel_efficiency: self.fuel_efficiency,
            fuel_cost: self.fuel_cost,
            toll_route_distance: self.toll_route_distance,
            toll_free_route_distance: self.toll_free_route_distance,
            toll_cost: self.toll_cost,
            currency: self.currency,
            created_at: Some(self.created_at),
        }
    }
}
