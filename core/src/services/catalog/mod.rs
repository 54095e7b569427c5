//! Product catalog: search facade and owner-scoped listing management.

mod service;

pub use service::{CatalogService, ProductData};
