//! Account service: registration, login verification and profile management.
//!
//! Password hashing is delegated to a [`PasswordHasher`] implementation in
//! the infrastructure layer; this service never sees stored plaintext.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password hashing abstraction, implemented with bcrypt in infrastructure
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}

/// Account management service
pub struct AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new account service
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }

    fn validate_email(email: &str) -> DomainResult<()> {
        let valid = email.contains('@')
            && !email.starts_with('@')
            && !email.ends_with('@')
            && !email.contains(char::is_whitespace);
        if !valid {
            return Err(DomainError::validation("invalid email address"));
        }
        Ok(())
    }

    fn validate_password(password: &str) -> DomainResult<()> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }

    /// Register a new account
    pub async fn register(
        &self,
        name: String,
        email: String,
        phone: String,
        password: &str,
    ) -> DomainResult<User> {
        Self::validate_email(&email)?;
        Self::validate_password(password)?;
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if self.users.exists_by_email(&email).await? {
            return Err(DomainError::validation("Email already registered"));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .users
            .create(User::new(name, email, phone, password_hash))
            .await?;

        info!(user_id = %user.id, "account registered");
        Ok(user)
    }

    /// Verify credentials, returning the account on success.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(DomainError::Unauthorized);
        }

        Ok(user)
    }

    /// Fetch an account's profile
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Update the mutable profile fields
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: String,
        phone: String,
    ) -> DomainResult<User> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let mut user = self.get_profile(user_id).await?;
        user.update_profile(name, phone);
        self.users.update(user).await
    }

    /// Change the account password after verifying the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        Self::validate_password(new_password)?;

        let mut user = self.get_profile(user_id).await?;
        if !self.hasher.verify(current_password, &user.password_hash)? {
            return Err(DomainError::validation("current password is incorrect"));
        }

        user.set_password_hash(self.hasher.hash(new_password)?);
        self.users.update(user).await?;
        info!(user_id = %user_id, "password changed");
        Ok(())
    }

    /// Delete the account after verifying the password
    pub async fn delete_account(&self, user_id: Uuid, password: &str) -> DomainResult<()> {
        let user = self.get_profile(user_id).await?;
        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(DomainError::Unauthorized);
        }

        self.users.delete(user_id).await?;
        info!(user_id = %user_id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;

    /// Reversible stand-in so tests do not depend on bcrypt timings
    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> DomainResult<String> {
            Ok(format!("hashed:{}", password))
        }

        fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    fn service() -> AccountService<MockUserRepository, PlainHasher> {
        AccountService::new(Arc::new(MockUserRepository::new()), Arc::new(PlainHasher))
    }

    async fn register(service: &AccountService<MockUserRepository, PlainHasher>) -> User {
        service
            .register(
                "Ana".to_string(),
                "ana@example.com".to_string(),
                "+40711111111".to_string(),
                "parola1234",
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = service();
        let user = register(&service).await;
        assert_eq!(user.password_hash, "hashed:parola1234");
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let service = service();

        assert!(matches!(
            service
                .register("Ana".into(), "not-an-email".into(), "1".into(), "parola1234")
                .await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            service
                .register("Ana".into(), "ana@example.com".into(), "1".into(), "short")
                .await,
            Err(DomainError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let service = service();
        register(&service).await;

        let err = service
            .register(
                "Alt".to_string(),
                "ana@example.com".to_string(),
                "+40722222222".to_string(),
                "parola1234",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_login_verifies_credentials() {
        let service = service();
        let user = register(&service).await;

        let logged_in = service.login("ana@example.com", "parola1234").await.unwrap();
        assert_eq!(logged_in.id, user.id);

        assert!(matches!(
            service.login("ana@example.com", "wrong-password").await,
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            service.login("nobody@example.com", "parola1234").await,
            Err(DomainError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_change_password_requires_current_one() {
        let service = service();
        let user = register(&service).await;

        assert!(matches!(
            service.change_password(user.id, "wrong", "newparola123").await,
            Err(DomainError::Validation { .. })
        ));

        service
            .change_password(user.id, "parola1234", "newparola123")
            .await
            .unwrap();
        service.login("ana@example.com", "newparola123").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_account_requires_password() {
        let service = service();
        let user = register(&service).await;

        assert!(matches!(
            service.delete_account(user.id, "wrong").await,
            Err(DomainError::Unauthorized)
        ));

        service.delete_account(user.id, "parola1234").await.unwrap();
        assert!(matches!(
            service.get_profile(user.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
