use crate::constants::*;
use crate::models::CurrencyCode;
use std::env;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StoreBackend {
    Postgres,
    Postgrest,
    #[default]
    Memory, // Nothing persists across restarts
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "postgrest" | "supabase" => Ok(StoreBackend::Postgrest),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!(
                "Invalid preference store: {}. Use 'postgres', 'postgrest' or 'memory'",
                s
            )),
        }
    }
}

/// Connection settings for the remote preference store
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres { database_url: String },
    Postgrest {
        base_url: String,
        api_key: String,
        table: String,
    },
    Memory,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend: StoreBackend = env::var("PREFERENCE_STORE")
            .unwrap_or_else(|_| "memory".to_string())
            .parse()?;

        Ok(match backend {
            StoreBackend::Postgres => StoreConfig::Postgres {
                database_url: env::var("DATABASE_URL")
                    .map_err(|_| "DATABASE_URL must be set for the postgres store")?,
            },
            StoreBackend::Postgrest => StoreConfig::Postgrest {
                base_url: env::var("SUPABASE_URL")
                    .map_err(|_| "SUPABASE_URL must be set for the postgrest store")?,
                api_key: env::var("SUPABASE_ANON_KEY")
                    .map_err(|_| "SUPABASE_ANON_KEY must be set for the postgrest store")?,
                table: env::var("PREFERENCES_TABLE")
                    .unwrap_or_else(|_| PREFERENCES_TABLE.to_string()),
            },
            StoreBackend::Memory => StoreConfig::Memory,
        })
    }

    pub fn backend(&self) -> StoreBackend {
        match self {
            StoreConfig::Postgres { .. } => StoreBackend::Postgres,
            StoreConfig::Postgrest { .. } => StoreBackend::Postgrest,
            StoreConfig::Memory => StoreBackend::Memory,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub default_currency: CurrencyCode,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let default_currency = CurrencyCode::new(
            &env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
        )
        .map_err(|e| format!("Invalid DEFAULT_CURRENCY: {}", e))?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            store: StoreConfig::from_env()?,
            default_currency,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
