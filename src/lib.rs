//! AutoHack registration API
//!
//! Accepts team applications from the public form:
//! - Validates required fields and team size
//! - Normalizes participant phone numbers to `+82` form
//! - Stores a team and its members in one transaction
//! - Reports duplicate team names as conflicts

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::RegistrationRepository;
use infrastructure::registration::{
    InMemoryRegistrationRepository, PostgresRegistrationRepository, RegistrationService,
};
use infrastructure::storage::{connect_pool, run_migrations, StorageType};
use tracing::{info, warn};

/// Create the application state for the configured storage backend
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = create_repository(config).await?;
    let service = RegistrationService::new(repository, config.registration.max_participants);

    Ok(AppState::new(Arc::new(service)))
}

async fn create_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn RegistrationRepository>> {
    let backend = StorageType::parse(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!("unknown storage backend '{}'", config.storage.backend)
    })?;

    info!("Storage backend: {:?}", backend);

    match backend {
        StorageType::Postgres => {
            let pool = connect_pool(&config.database).await?;

            if config.database.run_migrations {
                let applied = run_migrations(&pool).await?;
                info!(applied, "Database migrations complete");
            }

            Ok(Arc::new(PostgresRegistrationRepository::new(pool)))
        }
        StorageType::InMemory => {
            warn!("Using in-memory storage; registrations are lost on restart");
            Ok(Arc::new(InMemoryRegistrationRepository::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let mut config = AppConfig::default();
        config.storage.backend = "memory".to_string();

        let state = create_app_state(&config).await.unwrap();
        assert!(state.registration_service.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_app_state_rejects_unknown_backend() {
        let mut config = AppConfig::default();
        config.storage.backend = "sqlite".to_string();

        let err = create_app_state(&config).await.err().unwrap();
        assert!(err.to_string().contains("sqlite"));
    }
}
