//! Application state threaded into every handler.

use std::sync::Arc;

use paramed_infrastructure::repositories::RegistrationRepository;

use crate::config::ApiConfig;

/// Shared application state.
///
/// The repository is a trait object constructed once at startup; handlers
/// never know which backend they are talking to.
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: ApiConfig,
    /// The storage handle
    pub registrations: Arc<dyn RegistrationRepository>,
}

impl AppState {
    /// Create application state from configuration and a storage backend.
    pub fn new(config: ApiConfig, registrations: Arc<dyn RegistrationRepository>) -> Self {
        Self {
            config,
            registrations,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
