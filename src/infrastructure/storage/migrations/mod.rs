//! Database migrations infrastructure

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::DomainError;

/// Applies versioned migrations and records them in `_migrations`
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                success BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Runs a single migration inside a transaction; no-op when already applied
    pub async fn run_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)",
        )
        .bind(migration.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))?;

        if applied {
            return Ok(false);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin migration: {}", e)))?;

        sqlx::raw_sql(migration.up)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(migration.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tx.commit().await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to commit migration {}: {}",
                migration.version, e
            ))
        })?;

        info!(
            version = migration.version,
            description = migration.description,
            "Applied migration"
        );

        Ok(true)
    }

    /// Returns the latest applied migration version
    pub async fn current_version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        let version: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(version) FROM _migrations WHERE success = TRUE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get migration version: {}", e)))?;

        Ok(version)
    }
}

/// Represents a database migration
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub up: &'static str,
}

/// Schema for registrations and their participants
pub fn registration_migrations() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            description: "Create registrations table",
            up: r#"
            CREATE TABLE IF NOT EXISTS registrations (
                id UUID PRIMARY KEY,
                team_name TEXT NOT NULL,
                team_leader_name TEXT NOT NULL,
                participation_reason TEXT NOT NULL DEFAULT '',
                how_did_you_know TEXT NOT NULL DEFAULT '',
                hacking_experience TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT registrations_team_name_key UNIQUE (team_name)
            );
            CREATE INDEX IF NOT EXISTS idx_registrations_created_at ON registrations(created_at);
            "#,
        },
        Migration {
            version: 2,
            description: "Create participants table",
            up: r#"
            CREATE TABLE IF NOT EXISTS participants (
                id UUID PRIMARY KEY,
                registration_id UUID NOT NULL REFERENCES registrations(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                university TEXT NOT NULL,
                department TEXT NOT NULL,
                name TEXT NOT NULL,
                gender TEXT NOT NULL,
                contact TEXT NOT NULL,
                email TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_participants_registration
                ON participants(registration_id, position);
            "#,
        },
    ]
}

/// Runs all pending registration migrations, returning how many were applied
pub async fn run_migrations(pool: &PgPool) -> Result<usize, DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());
    let mut applied = 0;

    for migration in registration_migrations() {
        if migrator.run_migration(&migration).await? {
            applied += 1;
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_order() {
        let migrations = registration_migrations();

        assert!(!migrations.is_empty());

        for i in 1..migrations.len() {
            assert!(
                migrations[i].version > migrations[i - 1].version,
                "Migrations should be in ascending order"
            );
        }
    }

    #[test]
    fn test_migrations_content() {
        for migration in registration_migrations() {
            assert!(!migration.description.is_empty());
            assert!(!migration.up.trim().is_empty());
        }
    }

    #[test]
    fn test_team_name_constraint_is_named() {
        let migrations = registration_migrations();
        assert!(migrations[0]
            .up
            .contains("CONSTRAINT registrations_team_name_key UNIQUE (team_name)"));
    }

    #[test]
    fn test_participants_cascade_with_registration() {
        let migrations = registration_migrations();
        assert!(migrations[1].up.contains("ON DELETE CASCADE"));
    }
}
