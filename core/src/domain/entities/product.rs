//! Product entity and the closed category/location sets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of product categories.
///
/// Shared between the query facade and the listing endpoints; generated once
/// and treated as static configuration, never runtime-mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Tools,
    Vehicles,
    Sports,
    HomeAppliances,
    Clothing,
    Books,
    Other,
}

impl ProductCategory {
    /// All categories, in display order
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Electronics,
        ProductCategory::Tools,
        ProductCategory::Vehicles,
        ProductCategory::Sports,
        ProductCategory::HomeAppliances,
        ProductCategory::Clothing,
        ProductCategory::Books,
        ProductCategory::Other,
    ];

    /// Stable string form used in the database and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Tools => "tools",
            Self::Vehicles => "vehicles",
            Self::Sports => "sports",
            Self::HomeAppliances => "home_appliances",
            Self::Clothing => "clothing",
            Self::Books => "books",
            Self::Other => "other",
        }
    }

    /// Parse from the stable string form
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Closed set of supported countries for product locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    Romania,
    Moldova,
    Hungary,
    Bulgaria,
    Germany,
    France,
    Italy,
    Spain,
}

impl Country {
    /// All supported countries, in display order
    pub const ALL: [Country; 8] = [
        Country::Romania,
        Country::Moldova,
        Country::Hungary,
        Country::Bulgaria,
        Country::Germany,
        Country::France,
        Country::Italy,
        Country::Spain,
    ];

    /// Stable string form used in the database and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Romania => "romania",
            Self::Moldova => "moldova",
            Self::Hungary => "hungary",
            Self::Bulgaria => "bulgaria",
            Self::Germany => "germany",
            Self::France => "france",
            Self::Italy => "italy",
            Self::Spain => "spain",
        }
    }

    /// Parse from the stable string form
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Product entity: a listing owned by exactly one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Owning user; only the owner may mutate the listing
    pub owner_id: Uuid,

    /// Category from the closed set
    pub category: ProductCategory,

    /// Listing name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Rental price per day
    pub price_per_day: Decimal,

    /// Country where the product is located
    pub location: Country,

    /// Reference to the stored listing image
    pub image_path: String,

    /// Whether the owner currently offers the product for rent
    pub available: bool,

    /// Timestamp when the listing was created
    pub added_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product listing owned by `owner_id`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: Uuid,
        category: ProductCategory,
        name: String,
        description: String,
        price_per_day: Decimal,
        location: Country,
        image_path: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            category,
            name,
            description,
            price_per_day,
            location,
            image_path,
            available: true,
            added_at: Utc::now(),
        }
    }

    /// Checks whether `user_id` owns this listing
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Read-model row for catalog listings: product attributes joined with the
/// owner's display name and the derived average rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub category: ProductCategory,
    pub name: String,
    pub description: String,
    pub price_per_day: Decimal,
    pub location: Country,
    pub image_path: String,
    pub available: bool,
    pub added_at: DateTime<Utc>,
    /// Owner's display name
    pub owner_name: String,
    /// Mean review stars, `None` when the product has no reviews yet
    pub average_rating: Option<f64>,
}

impl ProductSummary {
    /// Builds a summary from a product plus its derived attributes
    pub fn from_product(product: &Product, owner_name: String, average_rating: Option<f64>) -> Self {
        Self {
            id: product.id,
            category: product.category,
            name: product.name.clone(),
            description: product.description.clone(),
            price_per_day: product.price_per_day,
            location: product.location,
            image_path: product.image_path.clone(),
            available: product.available,
            added_at: product.added_at,
            owner_name,
            average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_category_round_trip() {
        for category in ProductCategory::ALL {
            assert_eq!(ProductCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(ProductCategory::parse("garden_gnomes"), None);
    }

    #[test]
    fn test_country_round_trip() {
        for country in Country::ALL {
            assert_eq!(Country::parse(country.as_str()), Some(country));
        }
        assert_eq!(Country::parse("atlantis"), None);
    }

    #[test]
    fn test_ownership_check() {
        let owner = Uuid::new_v4();
        let product = Product::new(
            owner,
            ProductCategory::Tools,
            "Drill".to_string(),
            "Cordless drill".to_string(),
            Decimal::new(2500, 2),
            Country::Romania,
            "images/drill.jpg".to_string(),
        );

        assert!(product.is_owned_by(owner));
        assert!(!product.is_owned_by(Uuid::new_v4()));
        assert!(product.available);
    }
}
