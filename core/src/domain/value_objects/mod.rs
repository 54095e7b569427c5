//! Value objects shared across the domain layer.

pub mod date_range;

pub use date_range::DateRange;
