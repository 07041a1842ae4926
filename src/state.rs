//! Application state for Workbench.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::services::EnvironmentService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup.
    pub config: Arc<Config>,
    /// Host facts for the lab dashboard.
    pub environment: Arc<EnvironmentService>,
}

impl AppState {
    /// Create a new application state, probing the host environment.
    pub async fn new(config: Config) -> Self {
        let environment = EnvironmentService::probe(&config.lab).await;
        Self::with_environment(config, environment)
    }

    /// Create application state around an already-resolved environment.
    pub fn with_environment(config: Config, environment: EnvironmentService) -> Self {
        Self {
            config: Arc::new(config),
            environment: Arc::new(environment),
        }
    }
}
