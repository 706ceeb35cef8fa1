//! Driving port for reading a recipe's reviews.

use async_trait::async_trait;

use crate::domain::{Error, RecipeId, ReviewList};

/// Driving port for review listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsQuery: Send + Sync {
    /// List the first page of reviews for a recipe, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `recipe_not_found` when the recipe does not exist.
    async fn list_reviews(&self, recipe_id: RecipeId) -> Result<ReviewList, Error>;
}
