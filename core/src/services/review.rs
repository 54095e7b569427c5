//! Review service: star ratings and the derived average.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ProductRepository, ReviewRepository, ReviewWithAuthor};

/// Review management over the product catalog
pub struct ReviewService<V, P>
where
    V: ReviewRepository,
    P: ProductRepository,
{
    reviews: Arc<V>,
    products: Arc<P>,
}

impl<V, P> ReviewService<V, P>
where
    V: ReviewRepository,
    P: ProductRepository,
{
    /// Create a new review service
    pub fn new(reviews: Arc<V>, products: Arc<P>) -> Self {
        Self { reviews, products }
    }

    /// Leave a review on a product.
    ///
    /// # Errors
    /// * `Validation` - stars outside 1..=5
    /// * `NotFound` - product does not exist
    /// * `BusinessRule` - owners cannot review their own listings
    pub async fn add_review(
        &self,
        product_id: Uuid,
        author_id: Uuid,
        stars: u8,
        comment: String,
    ) -> DomainResult<Review> {
        if !Review::stars_in_range(stars) {
            return Err(DomainError::validation("stars must be between 1 and 5"));
        }

        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        if product.is_owned_by(author_id) {
            return Err(DomainError::business_rule(
                "cannot review your own product",
            ));
        }

        let review = self
            .reviews
            .create(Review::new(product_id, author_id, stars, comment))
            .await?;
        info!(review_id = %review.id, product_id = %product_id, "review added");
        Ok(review)
    }

    /// All reviews for a product, newest first
    pub async fn reviews_for_product(
        &self,
        product_id: Uuid,
    ) -> DomainResult<Vec<ReviewWithAuthor>> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(DomainError::not_found("Product"));
        }
        self.reviews.find_by_product(product_id).await
    }

    /// Mean star rating for a product, `None` without reviews
    pub async fn average_stars(&self, product_id: Uuid) -> DomainResult<Option<f64>> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(DomainError::not_found("Product"));
        }
        self.reviews.average_stars(product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::product::{Country, Product, ProductCategory};
    use crate::repositories::{MockProductRepository, MockReviewRepository};
    use rust_decimal::Decimal;

    struct Fixture {
        service: ReviewService<MockReviewRepository, MockProductRepository>,
        product_id: Uuid,
        owner_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let reviews = Arc::new(MockReviewRepository::new());
        let products = Arc::new(MockProductRepository::new());

        let owner_id = Uuid::new_v4();
        let product = Product::new(
            owner_id,
            ProductCategory::Sports,
            "Kayak".to_string(),
            "Two-seat kayak".to_string(),
            Decimal::new(45, 0),
            Country::Romania,
            String::new(),
        );
        let product_id = product.id;
        products.create(product).await.unwrap();

        Fixture {
            service: ReviewService::new(reviews, products),
            product_id,
            owner_id,
        }
    }

    #[tokio::test]
    async fn test_average_over_reviews() {
        let f = fixture().await;

        assert_eq!(f.service.average_stars(f.product_id).await.unwrap(), None);

        f.service
            .add_review(f.product_id, Uuid::new_v4(), 5, "great".to_string())
            .await
            .unwrap();
        f.service
            .add_review(f.product_id, Uuid::new_v4(), 2, "meh".to_string())
            .await
            .unwrap();

        assert_eq!(
            f.service.average_stars(f.product_id).await.unwrap(),
            Some(3.5)
        );
    }

    #[tokio::test]
    async fn test_stars_out_of_range_rejected() {
        let f = fixture().await;

        for stars in [0u8, 6] {
            let err = f
                .service
                .add_review(f.product_id, Uuid::new_v4(), stars, String::new())
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_owner_cannot_review_own_product() {
        let f = fixture().await;

        let err = f
            .service
            .add_review(f.product_id, f.owner_id, 5, "amazing".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BusinessRule { .. }));
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let f = fixture().await;

        let err = f
            .service
            .reviews_for_product(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
