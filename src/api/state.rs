//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::registration::RegistrationService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(registration_service: Arc<RegistrationService>) -> Self {
        Self {
            registration_service,
        }
    }
}
