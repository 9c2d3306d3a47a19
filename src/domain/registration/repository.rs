//! Registration repository trait

use async_trait::async_trait;

use super::entity::{NewRegistration, Registration};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Write side of the registration store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync + std::fmt::Debug {
    /// Create a registration and all of its participants atomically.
    ///
    /// Returns [`DomainError::Conflict`] naming the colliding fields when a
    /// uniqueness constraint is violated; nothing is persisted in that case.
    async fn create(&self, registration: NewRegistration) -> Result<Registration, DomainError>;

    /// Verify the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
