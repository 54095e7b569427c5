//! Route handlers grouped by resource.

pub mod auth;
pub mod favorites;
pub mod products;
pub mod rentals;
pub mod reviews;
pub mod users;
