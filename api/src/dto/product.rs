//! Catalog DTOs: search query parameters and listing payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use rh_core::{
    Country, DomainError, DomainResult, ProductCategory, ProductData, ProductFilter, SortKey,
};

/// Catalog search query parameters, all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name and description
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub location: Option<String>,
    pub min_rating: Option<f64>,
    /// One of `price`, `rating`, `date`; anything else falls back to `price`
    pub sort_by: Option<String>,
}

impl ProductQuery {
    /// Build the domain filter, rejecting unknown category or location names
    pub fn to_filter(&self) -> DomainResult<ProductFilter> {
        let category = self
            .category
            .as_deref()
            .map(|value| {
                ProductCategory::parse(value).ok_or_else(|| {
                    DomainError::validation(format!("unknown category: {}", value))
                })
            })
            .transpose()?;

        let location = self
            .location
            .as_deref()
            .map(|value| {
                Country::parse(value)
                    .ok_or_else(|| DomainError::validation(format!("unknown location: {}", value)))
            })
            .transpose()?;

        Ok(ProductFilter {
            text: self.search.clone().unwrap_or_default(),
            category,
            min_price: self.min_price,
            max_price: self.max_price,
            location,
            min_rating: self.min_rating,
            sort: self
                .sort_by
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or_default(),
        })
    }
}

/// Listing payload for create and update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    pub category: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: String,

    pub price_per_day: Decimal,

    pub location: String,

    #[serde(default)]
    pub image_path: String,

    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl ProductPayload {
    /// Convert into the domain payload, rejecting unknown enum names
    pub fn to_data(&self) -> DomainResult<ProductData> {
        let category = ProductCategory::parse(&self.category).ok_or_else(|| {
            DomainError::validation(format!("unknown category: {}", self.category))
        })?;
        let location = Country::parse(&self.location).ok_or_else(|| {
            DomainError::validation(format!("unknown location: {}", self.location))
        })?;

        Ok(ProductData {
            category,
            name: self.name.clone(),
            description: self.description.clone(),
            price_per_day: self.price_per_day,
            location,
            image_path: self.image_path.clone(),
            available: self.available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parses_enums_and_sort() {
        let query = ProductQuery {
            search: Some("drill".to_string()),
            category: Some("tools".to_string()),
            sort_by: Some("rating".to_string()),
            ..Default::default()
        };

        let filter = query.to_filter().unwrap();
        assert_eq!(filter.text, "drill");
        assert_eq!(filter.category, Some(ProductCategory::Tools));
        assert_eq!(filter.sort, SortKey::Rating);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let query = ProductQuery {
            category: Some("spaceships".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            query.to_filter(),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_price() {
        let query = ProductQuery {
            sort_by: Some("popularity".to_string()),
            ..Default::default()
        };

        assert_eq!(query.to_filter().unwrap().sort, SortKey::Price);
    }
}
