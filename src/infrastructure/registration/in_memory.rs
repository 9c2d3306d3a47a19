//! In-memory registration repository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::registration::{
    NewRegistration, Participant, Registration, RegistrationId, RegistrationRepository,
};
use crate::domain::DomainError;

/// In-memory registration store keyed by team name.
///
/// Useful for development and tests. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryRegistrationRepository {
    registrations: Arc<RwLock<HashMap<String, Registration>>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self {
            registrations: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl InMemoryRegistrationRepository {
    pub(crate) async fn get_by_team_name(&self, team_name: &str) -> Option<Registration> {
        self.registrations.read().await.get(team_name).cloned()
    }

    pub(crate) async fn count(&self) -> usize {
        self.registrations.read().await.len()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn create(&self, registration: NewRegistration) -> Result<Registration, DomainError> {
        // Held for the whole insert so the team-name check and the write are atomic
        let mut registrations = self.registrations.write().await;

        if registrations.contains_key(registration.team_name()) {
            return Err(DomainError::conflict(["teamName"]));
        }

        let id = RegistrationId::generate();
        let mut participants = Vec::with_capacity(registration.participants().len());

        for (position, participant) in registration.participants().iter().enumerate() {
            participants.push(Participant {
                id: Uuid::new_v4(),
                registration_id: id,
                position: i32::try_from(position)
                    .map_err(|_| DomainError::internal("Participant position out of range"))?,
                university: participant.university().to_string(),
                department: participant.department().to_string(),
                name: participant.name().to_string(),
                gender: participant.gender().to_string(),
                contact: participant.contact().to_string(),
                email: participant.email().to_string(),
            });
        }

        let created = Registration {
            id,
            team_name: registration.team_name().to_string(),
            team_leader_name: registration.team_leader_name().to_string(),
            participation_reason: registration.participation_reason().to_string(),
            how_did_you_know: registration.how_did_you_know().to_string(),
            hacking_experience: registration.hacking_experience().map(String::from),
            created_at: Utc::now(),
            participants,
        };

        registrations.insert(created.team_name.clone(), created.clone());

        Ok(created)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::{validate_submission, ParticipantSubmission};
    use crate::domain::RegistrationSubmission;

    fn new_registration(team_name: &str, names: &[&str]) -> NewRegistration {
        let participants = names
            .iter()
            .map(|name| ParticipantSubmission {
                university: "KMU".to_string(),
                department: "Automotive".to_string(),
                name: name.to_string(),
                gender: "male".to_string(),
                contact: "010-9876-5432".to_string(),
                email: format!("{}@example.com", name),
            })
            .collect();

        let submission = RegistrationSubmission {
            team_name: Some(team_name.to_string()),
            team_leader_name: Some(names[0].to_string()),
            how_did_you_know: vec!["대학교 공지사항".to_string()],
            participants: Some(participants),
            ..Default::default()
        };

        validate_submission(submission, 4).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_materialized_registration() {
        let repo = InMemoryRegistrationRepository::new();

        let created = repo
            .create(new_registration("Red Team", &["kim"]))
            .await
            .unwrap();

        assert_eq!(created.team_name, "Red Team");
        assert_eq!(created.how_did_you_know, "대학교 공지사항");
        assert_eq!(created.participants.len(), 1);
        assert_eq!(created.participants[0].registration_id, created.id);
        assert_eq!(created.participants[0].contact, "+821098765432");

        let stored = repo.get_by_team_name("Red Team").await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_create_preserves_participant_order() {
        let repo = InMemoryRegistrationRepository::new();

        let created = repo
            .create(new_registration("Blue Team", &["a", "b", "c", "d"]))
            .await
            .unwrap();

        let names: Vec<&str> = created.participants.iter().map(|p| p.name.as_str()).collect();
        let positions: Vec<i32> = created.participants.iter().map(|p| p.position).collect();

        assert_eq!(names, ["a", "b", "c", "d"]);
        assert_eq!(positions, [0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_duplicate_team_name_conflicts_and_persists_nothing() {
        let repo = InMemoryRegistrationRepository::new();

        let original = repo
            .create(new_registration("Red Team", &["kim"]))
            .await
            .unwrap();

        let err = repo
            .create(new_registration("Red Team", &["park", "choi"]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict { ref fields } if fields == &["teamName"]));
        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.get_by_team_name("Red Team").await.unwrap(), original);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_duplicates_admit_one_team() {
        let repo = Arc::new(InMemoryRegistrationRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                let member = format!("member-{}", i);
                tokio::spawn(async move {
                    repo.create(new_registration("Race Team", &[member.as_str()]))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(e) => assert!(matches!(e, DomainError::Conflict { .. })),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = InMemoryRegistrationRepository::new();
        assert!(repo.ping().await.is_ok());
    }
}
