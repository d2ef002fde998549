use crate::constants::{POSTGREST_PATH_PREFIX, PREFERENCES_TABLE};
use crate::db::preference_repository::RawPreferenceRow;
use crate::db::PreferenceRepository;
use crate::error::{AppError, Result};
use crate::models::RoutePreference;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Preference store reached through a PostgREST endpoint (e.g. a Supabase project).
#[derive(Clone)]
pub struct PostgrestClient {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl PostgrestClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_table(base_url, api_key, PREFERENCES_TABLE.to_string())
    }

    pub fn with_table(base_url: String, api_key: String, table: String) -> Self {
        PostgrestClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table,
        }
    }

    fn table_url(&self) -> String {
        format!("{}{}/{}", self.base_url, POSTGREST_PATH_PREFIX, self.table)
    }

    /// Fail with the response body when the status is not 2xx
    async fn check_status(response: Response, operation: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::warn!(
            status = %status,
            operation,
            "PostgREST HTTP error {} on {}: {}",
            status, operation, error_text
        );
        Err(AppError::StoreApi(format!("HTTP {}: {}", status, error_text)))
    }

    pub async fn fetch_latest(&self) -> Result<Option<RoutePreference>> {
        tracing::debug!(table = %self.table, "PostgREST request: latest preference");

        let response = self
            .client
            .get(self.table_url())
            .query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", "1"),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::StoreApi(format!("Request failed: {}", e)))?;

        let rows: Vec<PostgrestRow> = Self::check_status(response, "select")
            .await?
            .json()
            .await
            .map_err(|e| AppError::StoreApi(format!("Failed to parse response: {}", e)))?;

        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.into_raw().into_preference()))
    }

    pub async fn insert_row(&self, preference: &RoutePreference) -> Result<RoutePreference> {
        let body = [NewPostgrestRow::from(preference)];

        tracing::debug!(table = %self.table, "PostgREST request: insert preference");

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::StoreApi(format!("Request failed: {}", e)))?;

        let rows: Vec<PostgrestRow> = Self::check_status(response, "insert")
            .await?
            .json()
            .await
            .map_err(|e| AppError::StoreApi(format!("Failed to parse response: {}", e)))?;

        rows.into_iter()
            .next()
            .map(|row| row.into_raw().into_preference())
            .ok_or_else(|| AppError::StoreApi("Insert returned no rows".to_string()))
    }
}

#[async_trait]
impl PreferenceRepository for PostgrestClient {
    async fn load_latest(&self) -> Result<Option<RoutePreference>> {
        self.fetch_latest().await
    }

    async fn insert(&self, preference: &RoutePreference) -> Result<RoutePreference> {
        self.insert_row(preference).await
    }

    async fn health_check(&self) -> bool {
        self.fetch_latest().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "postgrest"
    }
}

// PostgREST wire types

#[derive(Debug, Deserialize)]
struct PostgrestRow {
    id: Uuid,
    vehicle_type: String,
    fuel_efficiency: f64,
    fuel_cost: f64,
    toll_route_distance: f64,
    toll_free_route_distance: f64,
    toll_cost: f64,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    created_at: Option<OffsetDateTime>,
}

impl PostgrestRow {
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
            created_at: self.created_at,
        }
    }
}

/// Insert payload; `id` and `created_at` are assigned by the table defaults
#[derive(Debug, Serialize)]
struct NewPostgrestRow<'a> {
    vehicle_type: &'static str,
    fuel_efficiency: f64,
    fuel_cost: f64,
    toll_route_distance: f64,
    toll_free_route_distance: f64,
    toll_cost: f64,
    currency: &'a str,
}

impl<'a> From<&'a RoutePreference> for NewPostgrestRow<'a> {
    fn from(p: &'a RoutePreference) -> Self {
        NewPostgrestRow {
            vehicle_type: p.vehicle_type.as_str(),
            fuel_efficiency: p.fuel_efficiency,
            fuel_cost: p.fuel_cost,
            toll_route_distance: p.toll_route_distance,
            toll_free_route_distance: p.toll_free_route_distance,
            toll_cost: p.toll_cost,
            currency: p.currency.as_str(),
        }
    }
}
