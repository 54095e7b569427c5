//! Rental workflow: booking creation, listing, cancellation and the
//! rental-facing product view.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CancelOutcome, ProductRentalDetails, RentalService, RentalSummary};
