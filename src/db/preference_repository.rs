use crate::error::Result;
use crate::models::{CurrencyCode, RoutePreference, VehicleType};
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Shared row-to-RoutePreference conversion (used by the Pg and PostgREST stores)
// ---------------------------------------------------------------------------

/// Raw preference fields extracted from a stored row, before validation.
pub(crate) struct RawPreferenceRow {
    pub id: Uuid,
    pub vehicle_type: String,
    pub fuel_efficiency: f64,
    pub fuel_cost: f64,
    pub toll_route_distance: f64,
    pub toll_free_route_distance: f64,
    pub toll_cost: f64,
    pub currency: Option<String>,
    pub created_at: Option<OffsetDateTime>,
}

impl RawPreferenceRow {
    pub fn into_preference(self) -> RoutePreference {
        let vehicle_type = self.vehicle_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid vehicle type '{}' for preference {}, defaulting to car",
                self.vehicle_type,
                self.id
            );
            VehicleType::Car
        });

        let currency = match self.currency.as_deref() {
            None | Some("") => CurrencyCode::default(),
            Some(code) => CurrencyCode::new(code).unwrap_or_else(|e| {
                tracing::warn!("{} on preference {}, using default", e, self.id);
                CurrencyCode::default()
            }),
        };

        let preference = RoutePreference {
            id: Some(self.id),
            vehicle_type,
            fuel_efficiency: self.fuel_efficiency,
            fuel_cost: self.fuel_cost,
            toll_route_distance: self.toll_route_distance,
            toll_free_route_distance: self.toll_free_route_distance,
            toll_cost: self.toll_cost,
            currency,
            created_at: self.created_at,
        };

        // Returned as stored; the form re-validates before any calculation
        if let Err(e) = preference.validate() {
            tracing::warn!("Stored preference {} is out of range: {}", self.id, e);
        }

        preference
    }
}

/// Append-only store of route preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Newest record by creation time, `None` when the table is empty
    async fn load_latest(&self) -> Result<Option<RoutePreference>>;

    /// Append a record; returns it with the store-assigned id and timestamp
    async fn insert(&self, preference: &RoutePreference) -> Result<RoutePreference>;

    async fn health_check(&self) -> bool;

    fn backend_name(&self) -> &'static str;
}

pub struct PgPreferenceRepository {
    pool: sqlx::PgPool,
}

impl PgPreferenceRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for PgPreferenceRepository {
    async fn load_latest(&self) -> Result<Option<RoutePreference>> {
        Ok(super::preference_queries::find_latest_preference(&self.pool).await?)
    }

    async fn insert(&self, preference: &RoutePreference) -> Result<RoutePreference> {
        Ok(super::preference_queries::insert_preference(&self.pool, preference).await?)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
