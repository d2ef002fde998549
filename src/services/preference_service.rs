use crate::constants::{MSG_LOAD_FAILED, MSG_SAVE_FAILED, MSG_SAVE_OK};
use crate::db::PreferenceRepository;
use crate::error::{AppError, Result};
use crate::models::{CurrencyCode, Notification, PreferenceForm};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of loading the last-used inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceLoad {
    pub preference: Option<PreferenceForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// Result of saving the current inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceSave {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<PreferenceForm>,
    pub notification: Notification,
}

/// Holds a busy flag for the lifetime of one operation.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool, operation: &str) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| BusyGuard(flag))
            .map_err(|_| AppError::Busy(format!("{} is already running", operation)))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Loads and saves route preferences on top of a [`PreferenceRepository`].
///
/// Load and save each carry their own busy flag: a second call of the same
/// operation while one is in flight is rejected with [`AppError::Busy`], while
/// a load and a save may overlap freely. Store failures are logged and turned
/// into error notifications instead of propagating.
pub struct PreferenceService {
    repo: Arc<dyn PreferenceRepository>,
    default_currency: CurrencyCode,
    is_loading: AtomicBool,
    is_saving: AtomicBool,
}

impl PreferenceService {
    pub fn new(repo: Arc<dyn PreferenceRepository>, default_currency: CurrencyCode) -> Self {
        PreferenceService {
            repo,
            default_currency,
            is_loading: AtomicBool::new(false),
            is_saving: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving.load(Ordering::Acquire)
    }

    pub fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    pub fn repository(&self) -> &Arc<dyn PreferenceRepository> {
        &self.repo
    }

    pub async fn load_preferences(&self) -> Result<PreferenceLoad> {
        let _guard = BusyGuard::acquire(&self.is_loading, "Loading preferences")?;

        match self.repo.load_latest().await {
            Ok(Some(preference)) => {
                tracing::info!(
                    id = ?preference.id,
                    backend = self.repo.backend_name(),
                    "Loaded latest route preference"
                );
                Ok(PreferenceLoad {
                    preference: Some(PreferenceForm::from(&preference)),
                    notification: None,
                })
            }
            Ok(None) => {
                tracing::info!(
                    backend = self.repo.backend_name(),
                    "No saved route preference found"
                );
                Ok(PreferenceLoad {
                    preference: None,
                    notification: None,
                })
            }
            Err(e) => {
                tracing::error!(
                    backend = self.repo.backend_name(),
                    "Failed to load preferences: {}",
                    e
                );
                Ok(PreferenceLoad {
                    preference: None,
                    notification: Some(Notification::error(MSG_LOAD_FAILED)),
                })
            }
        }
    }

    /// Validates the form, then appends it to the store.
    /// Invalid input is an error; a store failure is a `saved: false` outcome.
    pub async fn save_preferences(&self, form: &PreferenceForm) -> Result<PreferenceSave> {
        let _guard = BusyGuard::acquire(&self.is_saving, "Saving preferences")?;

        let preference = form
            .to_preference(&self.default_currency)
            .map_err(AppError::Validation)?;

        match self.repo.insert(&preference).await {
            Ok(stored) => {
                tracing::info!(
                    id = ?stored.id,
                    vehicle_type = %stored.vehicle_type,
                    currency = %stored.currency,
                    backend = self.repo.backend_name(),
                    "Saved route preference"
                );
                Ok(PreferenceSave {
                    saved: true,
                    preference: Some(PreferenceForm::from(&stored)),
                    notification: Notification::success(MSG_SAVE_OK),
                })
            }
            Err(e) => {
                tracing::error!(
                    backend = self.repo.backend_name(),
                    "Error saving preferences: {}",
                    e
                );
                Ok(PreferenceSave {
                    saved: false,
                    preference: None,
                    notification: Notification::error(MSG_SAVE_FAILED),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryPreferenceRepository;
    use crate::models::{RoutePreference, VehicleType};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    struct FailingRepository;

    #[async_trait]
    impl PreferenceRepository for FailingRepository {
        async fn load_latest(&self) -> Result<Option<RoutePreference>> {
            Err(AppError::StoreApi("connection refused".to_string()))
        }

        async fn insert(&self, _preference: &RoutePreference) -> Result<RoutePreference> {
            Err(AppError::StoreApi("connection refused".to_string()))
        }

        async fn health_check(&self) -> bool {
            false
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    /// Blocks every call until released, so a call can be observed in flight.
    #[derive(Default)]
    struct GatedRepository {
        entered: Notify,
        release: Notify,
        inner: MemoryPreferenceRepository,
    }

    #[async_trait]
    impl PreferenceRepository for GatedRepository {
        async fn load_latest(&self) -> Result<Option<RoutePreference>> {
            self.entered.notify_one();
            self.release.notified().await;
            self.inner.load_latest().await
        }

        async fn insert(&self, preference: &RoutePreference) -> Result<RoutePreference> {
            self.entered.notify_one();
            self.release.notified().await;
            self.inner.insert(preference).await
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn backend_name(&self) -> &'static str {
            "gated"
        }
    }

    fn memory_service() -> PreferenceService {
        PreferenceService::new(
            Arc::new(MemoryPreferenceRepository::new()),
            CurrencyCode::default(),
        )
    }

    #[tokio::test]
    async fn test_load_with_nothing_saved() {
        let service = memory_service();
        let load = service.load_preferences().await.unwrap();
        assert!(load.preference.is_none());
        assert!(load.notification.is_none());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_form() {
        let service = memory_service();
        let form = PreferenceForm {
            vehicle_type: VehicleType::Motorcycle,
            fuel_efficiency: "27.5".to_string(),
            fuel_cost: "3.02".to_string(),
            toll_route_distance: "18".to_string(),
            toll_free_route_distance: "26.4".to_string(),
            toll_cost: "4".to_string(),
            currency: None,
            id: None,
        };

        let save = service.save_preferences(&form).await.unwrap();
        assert!(save.saved);
        assert_eq!(save.notification, Notification::success(MSG_SAVE_OK));

        let loaded = service.load_preferences().await.unwrap().preference.unwrap();
        assert!(loaded.id.is_some());
        assert_eq!(loaded.vehicle_type, VehicleType::Motorcycle);
        assert_eq!(loaded.currency.as_deref(), Some("AED"));
        assert_eq!(
            loaded.validate().unwrap(),
            form.validate().unwrap(),
            "numeric fields should survive the round trip"
        );
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_before_store() {
        let repo = Arc::new(MemoryPreferenceRepository::new());
        let service = PreferenceService::new(repo.clone(), CurrencyCode::default());
        let form = PreferenceForm {
            fuel_cost: "0".to_string(),
            ..PreferenceForm::default()
        };

        let err = service.save_preferences(&form).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.ends_with("Fuel cost")));
        assert!(repo.is_empty().await);
        assert!(!service.is_saving());
    }

    #[tokio::test]
    async fn test_store_failures_become_notifications() {
        let service = PreferenceService::new(Arc::new(FailingRepository), CurrencyCode::default());

        let load = service.load_preferences().await.unwrap();
        assert!(load.preference.is_none());
        assert_eq!(load.notification, Some(Notification::error(MSG_LOAD_FAILED)));

        let save = service
            .save_preferences(&PreferenceForm::default())
            .await
            .unwrap();
        assert!(!save.saved);
        assert!(save.notification.is_error());
        assert_eq!(save.notification.message, MSG_SAVE_FAILED);

        assert!(!service.is_loading());
        assert!(!service.is_saving());
    }

    #[tokio::test]
    async fn test_reentrant_save_is_rejected_but_load_proceeds() {
        let repo = Arc::new(GatedRepository::default());
        let service = Arc::new(PreferenceService::new(repo.clone(), CurrencyCode::default()));

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.save_preferences(&PreferenceForm::default()).await })
        };
        repo.entered.notified().await;
        assert!(service.is_saving());

        let second = service.save_preferences(&PreferenceForm::default()).await;
        assert!(matches!(second, Err(AppError::Busy(_))));

        // Loading is guarded independently
        assert!(!service.is_loading());
        let load = {
            let service = service.clone();
            tokio::spawn(async move { service.load_preferences().await })
        };
        repo.entered.notified().await;
        assert!(service.is_loading());

        repo.release.notify_one();
        repo.release.notify_one();

        let saved = first.await.unwrap().unwrap();
        assert!(saved.saved);
        assert!(load.await.unwrap().is_ok());
        assert!(!service.is_saving());
        assert!(!service.is_loading());
    }
}
