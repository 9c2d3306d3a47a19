//! Registration entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for RegistrationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant that passed validation and is ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub(super) university: String,
    pub(super) department: String,
    pub(super) name: String,
    pub(super) gender: String,
    pub(super) contact: String,
    pub(super) email: String,
}

impl NewParticipant {
    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Contact number in canonical form
    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A validated, normalized registration.
///
/// Only produced by [`validate_submission`](super::validate_submission), so
/// holding one guarantees the required fields are present, there is at least
/// one participant, and every contact number has been normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub(super) team_name: String,
    pub(super) team_leader_name: String,
    pub(super) participation_reason: String,
    pub(super) how_did_you_know: String,
    pub(super) hacking_experience: Option<String>,
    pub(super) participants: Vec<NewParticipant>,
}

impl NewRegistration {
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn team_leader_name(&self) -> &str {
        &self.team_leader_name
    }

    pub fn participation_reason(&self) -> &str {
        &self.participation_reason
    }

    /// Referral channels joined into a single text value
    pub fn how_did_you_know(&self) -> &str {
        &self.how_did_you_know
    }

    pub fn hacking_experience(&self) -> Option<&str> {
        self.hacking_experience.as_deref()
    }

    /// Participants in submission order
    pub fn participants(&self) -> &[NewParticipant] {
        &self.participants
    }
}

/// A persisted team member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Uuid,
    pub registration_id: RegistrationId,
    /// Zero-based position within the submitted team
    pub position: i32,
    pub university: String,
    pub department: String,
    pub name: String,
    pub gender: String,
    pub contact: String,
    pub email: String,
}

/// A persisted team registration with its participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub team_name: String,
    pub team_leader_name: String,
    pub participation_reason: String,
    pub how_did_you_know: String,
    pub hacking_experience: Option<String>,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_id_generate_is_unique() {
        assert_ne!(RegistrationId::generate(), RegistrationId::generate());
    }

    #[test]
    fn test_registration_serializes_camel_case() {
        let id = RegistrationId::generate();
        let registration = Registration {
            id,
            team_name: "Red Team".to_string(),
            team_leader_name: "Kim".to_string(),
            participation_reason: "Fun".to_string(),
            how_did_you_know: "기타".to_string(),
            hacking_experience: None,
            created_at: Utc::now(),
            participants: vec![Participant {
                id: Uuid::new_v4(),
                registration_id: id,
                position: 0,
                university: "Kookmin".to_string(),
                department: "CS".to_string(),
                name: "Kim".to_string(),
                gender: "male".to_string(),
                contact: "+821012345678".to_string(),
                email: "kim@example.com".to_string(),
            }],
        };

        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["teamName"], "Red Team");
        assert_eq!(json["teamLeaderName"], "Kim");
        assert_eq!(json["howDidYouKnow"], "기타");
        assert!(json["hackingExperience"].is_null());
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["participants"][0]["registrationId"], id.to_string());
        assert_eq!(json["participants"][0]["contact"], "+821012345678");
    }
}
