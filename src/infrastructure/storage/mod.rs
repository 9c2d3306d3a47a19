//! Storage backends and schema management

pub mod migrations;
mod postgres;

pub use migrations::{registration_migrations, run_migrations, Migration, PostgresMigrator};
pub use postgres::connect_pool;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_parse() {
        assert_eq!(StorageType::parse("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::parse("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::parse("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::parse("PG"), Some(StorageType::Postgres));
        assert_eq!(StorageType::parse("sqlite"), None);
    }
}
