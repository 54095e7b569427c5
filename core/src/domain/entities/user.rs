//! User entity representing a registered account in the RentHub marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across accounts
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Bcrypt hash of the password, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a fresh identifier
    pub fn new(name: String, email: String, phone: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Updates the mutable profile fields
    pub fn update_profile(&mut self, name: String, phone: String) {
        self.name = name;
        self.phone = phone;
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "+40711111111".to_string(),
            "$2b$12$hash".to_string(),
        );

        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        assert!(!user.id.is_nil());
    }

    #[test]
    fn test_update_profile() {
        let mut user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "+40711111111".to_string(),
            "hash".to_string(),
        );

        user.update_profile("Ana Maria".to_string(), "+40722222222".to_string());
        assert_eq!(user.name, "Ana Maria");
        assert_eq!(user.phone, "+40722222222");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "+40711111111".to_string(),
            "secret-hash".to_string(),
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
