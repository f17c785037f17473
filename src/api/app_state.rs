use crate::config::AppConfig;
use crate::observability::AppMetrics;
use crate::services::entry::{EntryService, EntryServiceImpl, create_entry_service};
use crate::storage::{EntryRepository, InMemoryEntryStore};
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Entry service for entry business logic
    pub entry_service: Arc<dyn EntryService>,
    /// Request and entry counters
    pub metrics: Arc<AppMetrics>,
    /// Whether the test-only reset route is mounted
    pub test_reset_enabled: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("entry_service", &"Arc<dyn EntryService>")
            .field("metrics", &"Arc<AppMetrics>")
            .field("test_reset_enabled", &self.test_reset_enabled)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(entry_service: Box<dyn EntryService>, test_reset_enabled: bool) -> Self {
        Self {
            entry_service: Arc::from(entry_service),
            metrics: Arc::new(AppMetrics::default()),
            test_reset_enabled,
        }
    }

    /// Build state from configuration around the given repository
    pub fn from_config(config: &AppConfig, repository: Arc<dyn EntryRepository>) -> Self {
        Self::new(
            create_entry_service(repository, config.latency.delay()),
            config.store.enable_test_reset,
        )
    }

    /// Seeded in-memory store, no latency, reset route enabled
    pub fn testing() -> Self {
        let service = EntryServiceImpl::new(Arc::new(InMemoryEntryStore::seeded()));
        Self::new(Box::new(service), true)
    }
}
