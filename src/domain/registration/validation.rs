//! Registration intake validation

use serde::Deserialize;
use thiserror::Error;

use super::entity::{NewParticipant, NewRegistration};
use super::phone::normalize_contact;

/// Delimiter used to store referral channels in a single column
pub const HOW_DID_YOU_KNOW_DELIMITER: &str = ", ";

/// Default upper bound on team size
pub const DEFAULT_MAX_PARTICIPANTS: usize = 4;

/// Errors that can occur during registration validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistrationValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("At most {0} participants are allowed")]
    TooManyParticipants(usize),
}

/// Registration payload as submitted by the application form.
///
/// Required top-level fields are optional here so that a missing field is
/// reported as a validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationSubmission {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub team_leader_name: Option<String>,
    #[serde(default)]
    pub participation_reason: Option<String>,
    #[serde(default)]
    pub how_did_you_know: Vec<String>,
    #[serde(default)]
    pub hacking_experience: Option<String>,
    /// Checked by the form before submitting; accepted but not enforced
    #[serde(default)]
    pub privacy_consent: Option<bool>,
    #[serde(default)]
    pub participants: Option<Vec<ParticipantSubmission>>,
}

/// One team member as submitted by the application form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticipantSubmission {
    pub university: String,
    pub department: String,
    pub name: String,
    pub gender: String,
    pub contact: String,
    pub email: String,
}

/// Validate a submission and normalize it for persistence
pub fn validate_submission(
    submission: RegistrationSubmission,
    max_participants: usize,
) -> Result<NewRegistration, RegistrationValidationError> {
    let team_name = required(submission.team_name)?;
    let team_leader_name = required(submission.team_leader_name)?;

    let participants = submission
        .participants
        .filter(|p| !p.is_empty())
        .ok_or(RegistrationValidationError::MissingRequiredFields)?;

    if participants.len() > max_participants {
        return Err(RegistrationValidationError::TooManyParticipants(
            max_participants,
        ));
    }

    Ok(NewRegistration {
        team_name,
        team_leader_name,
        participation_reason: submission.participation_reason.unwrap_or_default(),
        how_did_you_know: submission
            .how_did_you_know
            .join(HOW_DID_YOU_KNOW_DELIMITER),
        hacking_experience: submission.hacking_experience,
        participants: participants.into_iter().map(normalize_participant).collect(),
    })
}

fn required(value: Option<String>) -> Result<String, RegistrationValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(RegistrationValidationError::MissingRequiredFields)
}

fn normalize_participant(participant: ParticipantSubmission) -> NewParticipant {
    NewParticipant {
        contact: normalize_contact(&participant.contact),
        university: participant.university,
        department: participant.department,
        name: participant.name,
        gender: participant.gender,
        email: participant.email,
    }
}
