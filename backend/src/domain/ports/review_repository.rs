//! Port for review persistence.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{NewReview, RecipeId, Review, ReviewId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by review repository adapters.
    pub enum ReviewRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "review repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "review repository query failed: {message}",
    }
}

/// Storage for reviews.
///
/// Deletion is permanent; no tombstone is kept.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fetch a review by id. Returns `None` when it does not exist.
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError>;

    /// Persist a new review and return it with its assigned id.
    async fn insert(&self, review: NewReview) -> Result<Review, ReviewRepositoryError>;

    /// Overwrite an existing review.
    async fn save(&self, review: &Review) -> Result<(), ReviewRepositoryError>;

    /// Remove a review.
    ///
    /// Returns `Ok(true)` if the review was deleted, `Ok(false)` if it didn't
    /// exist.
    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewRepositoryError>;

    /// Fetch one window of reviews for a recipe, oldest first.
    ///
    /// Order is creation time ascending with ties broken by id. At most
    /// [`PageRequest::window`] rows are returned.
    async fn find_page_by_recipe(
        &self,
        recipe_id: &RecipeId,
        page: PageRequest,
    ) -> Result<Vec<Review>, ReviewRepositoryError>;
}

/// Fixture implementation with no stored reviews.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewRepository;

#[async_trait]
impl ReviewRepository for FixtureReviewRepository {
    async fn find_by_id(&self, _id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        Ok(review.into_review(ReviewId::new(1)))
    }

    async fn save(&self, _review: &Review) -> Result<(), ReviewRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _id: &ReviewId) -> Result<bool, ReviewRepositoryError> {
        Ok(false)
    }

    async fn find_page_by_recipe(
        &self,
        _recipe_id: &RecipeId,
        _page: PageRequest,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        Ok(Vec::new())
    }
}
