//! Registration domain module
//!
//! A registration is one team's application to the event. Participants are
//! owned by their registration and are only ever created together with it.

mod entity;
mod phone;
mod repository;
mod validation;

pub use entity::{NewParticipant, NewRegistration, Participant, Registration, RegistrationId};
pub use phone::normalize_contact;
pub use repository::RegistrationRepository;
pub use validation::{
    validate_submission, ParticipantSubmission, RegistrationSubmission,
    RegistrationValidationError, DEFAULT_MAX_PARTICIPANTS, HOW_DID_YOU_KNOW_DELIMITER,
};

#[cfg(test)]
pub use repository::MockRegistrationRepository;
