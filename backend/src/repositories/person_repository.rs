//! Person repository trait for dependency injection and testing.
//!
//! This module defines the PersonRepository trait which can be mocked
//! using mockall for testing purposes.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::person::Person;
use crate::types::PersonId;

/// Repository trait for Person operations.
///
/// Single-record lookups return `Ok(None)` when nothing matches; turning that
/// into a 404 is the handler's job. Use `MockPersonRepository` in tests to
/// mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Find all people in repository order
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    /// Find a person by ID
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, AppError>;

    /// Find the first person whose name equals `name`
    async fn find_first_by_name(&self, name: &str) -> Result<Option<Person>, AppError>;

    /// Insert or update a person, returning the stored record with its id set
    async fn save(&self, person: Person) -> Result<Person, AppError>;

    /// Delete a stored person
    async fn delete(&self, person: &Person) -> Result<(), AppError>;
}
