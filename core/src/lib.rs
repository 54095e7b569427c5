//! # RentHub Core
//!
//! Core business logic and domain layer for the RentHub backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Country, Favorite, Product, ProductCategory, ProductSummary, Rental, RentalStatus, Review,
    User,
};
pub use domain::value_objects::DateRange;
pub use errors::{DomainError, DomainResult};
pub use repositories::{
    FavoriteRepository, ProductFilter, ProductRepository, RentalRepository, RentalWithProduct,
    ReviewRepository, ReviewWithAuthor, SortKey, UserRepository,
};
pub use services::{
    AccountService, AvailabilityService, CancelOutcome, CatalogService, FavoriteService,
    PasswordHasher, ProductData, ProductRentalDetails, RentalService, RentalSummary,
    ReviewService,
};
