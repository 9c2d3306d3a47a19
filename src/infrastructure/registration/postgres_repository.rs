//! PostgreSQL registration repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::registration::{
    NewRegistration, Participant, Registration, RegistrationId, RegistrationRepository,
};
use crate::domain::DomainError;

/// Unique constraint on `registrations.team_name`
const TEAM_NAME_CONSTRAINT: &str = "registrations_team_name_key";

/// PostgreSQL implementation of RegistrationRepository
#[derive(Debug, Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    team_name: String,
    team_leader_name: String,
    participation_reason: String,
    how_did_you_know: String,
    hacking_experience: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct ParticipantRow {
    id: Uuid,
    registration_id: Uuid,
    position: i32,
    university: String,
    department: String,
    name: String,
    gender: String,
    contact: String,
    email: String,
}

impl RegistrationRow {
    fn into_registration(self, participants: Vec<Participant>) -> Registration {
        Registration {
            id: RegistrationId::from(self.id),
            team_name: self.team_name,
            team_leader_name: self.team_leader_name,
            participation_reason: self.participation_reason,
            how_did_you_know: self.how_did_you_know,
            hacking_experience: self.hacking_experience,
            created_at: self.created_at,
            participants,
        }
    }
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Self {
            id: row.id,
            registration_id: RegistrationId::from(row.registration_id),
            position: row.position,
            university: row.university,
            department: row.department,
            name: row.name,
            gender: row.gender,
            contact: row.contact,
            email: row.email,
        }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn create(&self, registration: NewRegistration) -> Result<Registration, DomainError> {
        let id = RegistrationId::generate();

        // Dropping the transaction without commit rolls every insert back
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let row: RegistrationRow = sqlx::query_as(
            r#"
            INSERT INTO registrations (id, team_name, team_leader_name, participation_reason,
                                       how_did_you_know, hacking_experience)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, team_name, team_leader_name, participation_reason,
                      how_did_you_know, hacking_experience, created_at
            "#,
        )
        .bind(*id.as_uuid())
        .bind(registration.team_name())
        .bind(registration.team_leader_name())
        .bind(registration.participation_reason())
        .bind(registration.how_did_you_know())
        .bind(registration.hacking_experience())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        let mut participants = Vec::with_capacity(registration.participants().len());

        for (position, participant) in registration.participants().iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|_| DomainError::internal("Participant position out of range"))?;

            let row: ParticipantRow = sqlx::query_as(
                r#"
                INSERT INTO participants (id, registration_id, position, university, department,
                                          name, gender, contact, email)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING id, registration_id, position, university, department,
                          name, gender, contact, email
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(*id.as_uuid())
            .bind(position)
            .bind(participant.university())
            .bind(participant.department())
            .bind(participant.name())
            .bind(participant.gender())
            .bind(participant.contact())
            .bind(participant.email())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_write_error)?;

            participants.push(Participant::from(row));
        }

        tx.commit().await.map_err(map_write_error)?;

        Ok(row.into_registration(participants))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }
}

fn map_write_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return DomainError::conflict(conflict_fields(db_err.constraint()));
        }
    }

    DomainError::storage(format!("Failed to create registration: {}", e))
}

/// Translate a violated constraint into the request field names it guards
fn conflict_fields(constraint: Option<&str>) -> Vec<String> {
    match constraint {
        Some(TEAM_NAME_CONSTRAINT) => vec!["teamName".to_string()],
        Some(other) => vec![other.to_string()],
        None => vec!["registration".to_string()],
    }
}
