//! # RentHub Infrastructure
//!
//! Concrete implementations of the core repository and security traits:
//! MySQL persistence through SQLx and bcrypt password hashing.

pub mod database;
pub mod security;

use thiserror::Error;

/// Infrastructure-level errors raised while wiring up external services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub use database::connection::DatabasePool;
pub use database::mysql::{
    MySqlFavoriteRepository, MySqlProductRepository, MySqlRentalRepository,
    MySqlReviewRepository, MySqlUserRepository,
};
pub use security::BcryptPasswordHasher;
