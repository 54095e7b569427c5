//! Shared utilities and common types for the RentHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelopes
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
