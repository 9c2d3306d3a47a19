//! Domain layer - Core business logic and entities

pub mod error;
pub mod registration;

pub use error::DomainError;
pub use registration::{
    validate_submission, NewRegistration, Registration, RegistrationId, RegistrationRepository,
    RegistrationSubmission,
};
