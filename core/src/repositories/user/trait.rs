//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Check whether an account already uses the given email
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// Persist a new user
    ///
    /// Fails with a validation error when the email is already registered.
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Update an existing user
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Delete a user account
    ///
    /// Returns `false` when no user with the given id exists.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
