//! Registration intake service

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::registration::{
    validate_submission, Registration, RegistrationRepository, RegistrationSubmission,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_registration;

/// Validates submissions and hands normalized registrations to the store
#[derive(Debug, Clone)]
pub struct RegistrationService {
    repository: Arc<dyn RegistrationRepository>,
    max_participants: usize,
}

impl RegistrationService {
    /// Create a new registration service
    pub fn new(repository: Arc<dyn RegistrationRepository>, max_participants: usize) -> Self {
        Self {
            repository,
            max_participants,
        }
    }

    /// Validate, normalize and persist a submitted registration
    pub async fn submit(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<Registration, DomainError> {
        let new_registration = match validate_submission(submission, self.max_participants) {
            Ok(registration) => registration,
            Err(e) => {
                warn!(reason = %e, "Rejected registration submission");
                record_registration("invalid", None);
                return Err(DomainError::validation(e.to_string()));
            }
        };

        let participant_count = new_registration.participants().len();

        info!(
            team_name = %new_registration.team_name(),
            participants = participant_count,
            "Creating registration"
        );

        match self.repository.create(new_registration).await {
            Ok(registration) => {
                info!(
                    id = %registration.id,
                    team_name = %registration.team_name,
                    "Registration created"
                );
                record_registration("created", Some(participant_count));
                Ok(registration)
            }
            Err(e @ DomainError::Conflict { .. }) => {
                warn!(error = %e, "Registration conflicts with an existing record");
                record_registration("conflict", None);
                Err(e)
            }
            Err(e) => {
                record_registration("error", None);
                Err(e)
            }
        }
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::{MockRegistrationRepository, ParticipantSubmission};
    use crate::infrastructure::registration::InMemoryRegistrationRepository;

    fn participant(name: &str, contact: &str) -> ParticipantSubmission {
        ParticipantSubmission {
            university: "KMU".to_string(),
            department: "Security".to_string(),
            name: name.to_string(),
            gender: "female".to_string(),
            contact: contact.to_string(),
            email: format!("{}@example.com", name),
        }
    }

    fn submission(team_name: &str, participants: Vec<ParticipantSubmission>) -> RegistrationSubmission {
        RegistrationSubmission {
            team_name: Some(team_name.to_string()),
            team_leader_name: Some("leader".to_string()),
            participation_reason: Some("To learn".to_string()),
            how_did_you_know: vec!["친구/선배 소개".to_string()],
            participants: Some(participants),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_submission_never_reaches_repository() {
        let mut mock = MockRegistrationRepository::new();
        mock.expect_create().times(0);

        let service = RegistrationService::new(Arc::new(mock), 4);

        let mut missing_team = submission("x", vec![participant("a", "010")]);
        missing_team.team_name = None;
        let mut missing_leader = submission("x", vec![participant("a", "010")]);
        missing_leader.team_leader_name = Some(String::new());
        let no_participants = submission("x", Vec::new());

        for input in [missing_team, missing_leader, no_participants] {
            let err = service.submit(input).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Validation { ref message } if message == "Missing required fields")
            );
        }
    }

    #[tokio::test]
    async fn test_too_many_participants_is_validation_error() {
        let mut mock = MockRegistrationRepository::new();
        mock.expect_create().times(0);

        let service = RegistrationService::new(Arc::new(mock), 2);
        let members = vec![
            participant("a", "010"),
            participant("b", "010"),
            participant("c", "010"),
        ];

        let err = service.submit(submission("x", members)).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Validation { ref message } if message == "At most 2 participants are allowed")
        );
    }

    #[tokio::test]
    async fn test_repository_receives_normalized_registration() {
        let mut mock = MockRegistrationRepository::new();
        mock.expect_create()
            .times(1)
            .withf(|registration| {
                registration.team_name() == "Red Team"
                    && registration.how_did_you_know() == "친구/선배 소개"
                    && registration.participants().len() == 1
                    && registration.participants()[0].contact() == "+821012345678"
            })
            .returning(|_| Err(DomainError::storage("disk full")));

        let service = RegistrationService::new(Arc::new(mock), 4);

        let err = service
            .submit(submission("Red Team", vec![participant("a", "010-1234-5678")]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_conflict_is_propagated() {
        let mut mock = MockRegistrationRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|_| Err(DomainError::conflict(["teamName"])));

        let service = RegistrationService::new(Arc::new(mock), 4);

        let err = service
            .submit(submission("Red Team", vec![participant("a", "010-1234-5678")]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict { ref fields } if fields == &["teamName"]));
    }

    #[tokio::test]
    async fn test_single_participant_round_trip() {
        let service =
            RegistrationService::new(Arc::new(InMemoryRegistrationRepository::new()), 4);

        let registration = service
            .submit(submission("Red Team", vec![participant("kim", "010-1234-5678")]))
            .await
            .unwrap();

        assert_eq!(registration.participants.len(), 1);
        let member = &registration.participants[0];
        assert_eq!(member.name, "kim");
        assert_eq!(member.university, "KMU");
        assert_eq!(member.department, "Security");
        assert_eq!(member.gender, "female");
        assert_eq!(member.email, "kim@example.com");
        assert_eq!(member.contact, "+821012345678");
    }

    #[tokio::test]
    async fn test_ping_delegates_to_repository() {
        let mut mock = MockRegistrationRepository::new();
        mock.expect_ping()
            .times(1)
            .returning(|| Err(DomainError::storage("down")));

        let service = RegistrationService::new(Arc::new(mock), 4);
        assert!(service.ping().await.is_err());
    }
}
