//! Catalog query specification: conjunctive filters plus a sort key.
//!
//! The filter semantics live here so the in-memory mock, the SQL
//! implementation and the tests all agree on what a query means.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::product::{Country, ProductCategory, ProductSummary};

/// Sort key for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Price per day, ascending (default)
    Price,
    /// Average rating, descending; unrated products last
    Rating,
    /// Listing date, newest first
    Date,
}

impl SortKey {
    /// Parse a client-supplied sort key.
    ///
    /// Unrecognized keys deterministically fall back to the default,
    /// never an error.
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => Self::Rating,
            "date" => Self::Date,
            _ => Self::Price,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Price
    }
}

/// Conjunctive product search criteria
///
/// A product matches only when it satisfies every supplied predicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against name and description
    pub text: String,

    /// Category must equal, if supplied
    pub category: Option<ProductCategory>,

    /// Price per day must be at least, if supplied
    pub min_price: Option<Decimal>,

    /// Price per day must be at most, if supplied
    pub max_price: Option<Decimal>,

    /// Location must equal, if supplied
    pub location: Option<Country>,

    /// Average rating must be at least, if supplied
    pub min_rating: Option<f64>,

    /// Result ordering
    pub sort: SortKey,
}

impl ProductFilter {
    /// Whether a catalog row satisfies every supplied predicate
    pub fn matches(&self, product: &ProductSummary) -> bool {
        if !self.text.is_empty() {
            let needle = self.text.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }

        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price_per_day < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price_per_day > max {
                return false;
            }
        }

        if let Some(location) = self.location {
            if product.location != location {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            match product.average_rating {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }

        true
    }

    /// Order results according to the sort key.
    ///
    /// Products without reviews sort last under `Rating`.
    pub fn sort_results(&self, products: &mut [ProductSummary]) {
        match self.sort {
            SortKey::Price => {
                products.sort_by(|a, b| a.price_per_day.cmp(&b.price_per_day));
            }
            SortKey::Rating => {
                products.sort_by(|a, b| {
                    match (b.average_rating, a.average_rating) {
                        (Some(rb), Some(ra)) => {
                            rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
                        }
                        (Some(_), None) => std::cmp::Ordering::Greater,
                        (None, Some(_)) => std::cmp::Ordering::Less,
                        (None, None) => std::cmp::Ordering::Equal,
                    }
                });
            }
            SortKey::Date => {
                products.sort_by(|a, b| b.added_at.cmp(&a.added_at));
            }
        }
    }
}
