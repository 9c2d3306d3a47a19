//! Infrastructure layer - External service implementations

pub mod observability;
pub mod registration;
pub mod storage;
