//! Request and response data transfer objects.

pub mod auth;
pub mod favorite;
pub mod product;
pub mod rental;
pub mod review;
