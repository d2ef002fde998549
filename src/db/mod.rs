use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod memory_repo;
pub mod preference_queries;
pub mod preference_repository;

pub use memory_repo::MemoryPreferenceRepository;
pub use preference_repository::{PgPreferenceRepository, PreferenceRepository};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
