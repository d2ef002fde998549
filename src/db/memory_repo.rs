use crate::db::PreferenceRepository;
use crate::error::Result;
use crate::models::RoutePreference;
use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process, append-only preference store.
/// Used when no remote store is configured, and by tests.
#[derive(Default)]
pub struct MemoryPreferenceRepository {
    records: RwLock<Vec<RoutePreference>>,
}

impl MemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceRepository {
    async fn load_latest(&self) -> Result<Option<RoutePreference>> {
        let records = self.records.read().await;
        // Append-only, so insertion order is creation order
        Ok(records.last().cloned())
    }

    async fn insert(&self, preference: &RoutePreference) -> Result<RoutePreference> {
        let stored = preference.stored(
            preference.id.unwrap_or_else(Uuid::new_v4),
            OffsetDateTime::now_utc(),
        );
        self.records.write().await.push(stored.clone());
        tracing::debug!(id = ?stored.id, "Memory store appended preference");
        Ok(stored)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
