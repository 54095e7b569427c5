//! Business services containing domain logic and use cases.

pub mod account;
pub mod availability;
pub mod catalog;
pub mod favorite;
pub mod rental;
pub mod review;

// Re-export commonly used types
pub use account::{AccountService, PasswordHasher};
pub use availability::AvailabilityService;
pub use catalog::{CatalogService, ProductData};
pub use favorite::FavoriteService;
pub use rental::{CancelOutcome, ProductRentalDetails, RentalService, RentalSummary};
pub use review::ReviewService;
