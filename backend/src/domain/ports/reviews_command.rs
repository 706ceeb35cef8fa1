//! Driving port for review mutations.
//!
//! Callers pass the acting user's login name as a plain string on every
//! request; there is no ambient "current user".

use async_trait::async_trait;

use crate::domain::{Error, RecipeId, ReviewId, ReviewNotification, ReviewRecord};

/// Request to review a recipe.
#[derive(Debug, Clone)]
pub struct CreateReviewRequest {
    /// The recipe being reviewed.
    pub recipe_id: RecipeId,
    /// Review text. Must not be empty.
    pub comment: String,
    /// Login name of the acting user.
    pub actor: String,
}

/// Request to replace a review's comment.
#[derive(Debug, Clone)]
pub struct UpdateReviewRequest {
    /// The recipe the review belongs to.
    pub recipe_id: RecipeId,
    /// The review to update.
    pub review_id: ReviewId,
    /// Replacement text. Must not be empty.
    pub comment: String,
    /// Login name of the acting user.
    pub actor: String,
}

/// Request to remove a review.
#[derive(Debug, Clone)]
pub struct DeleteReviewRequest {
    /// The recipe the review belongs to.
    pub recipe_id: RecipeId,
    /// The review to delete.
    pub review_id: ReviewId,
    /// Login name of the acting user.
    pub actor: String,
}

/// Response from creating a review.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewResponse {
    /// The stored review.
    pub review: ReviewRecord,
    /// Event to dispatch, present only when the actor reviewed someone
    /// else's recipe.
    pub notification: Option<ReviewNotification>,
}

/// Confirmation returned after a review is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReviewResponse {
    /// The removed review.
    pub review_id: ReviewId,
    /// Fixed confirmation text.
    pub message: String,
}

/// Driving port for creating, updating, and deleting reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsCommand: Send + Sync {
    /// Create a review on a recipe.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor does not resolve (`user_not_found`).
    /// - The recipe does not exist (`recipe_not_found`).
    /// - The comment is empty (`empty_content`).
    /// - A store is unreachable or fails.
    async fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> Result<CreateReviewResponse, Error>;

    /// Replace a review's comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor, recipe, or review does not resolve,
    /// if the actor does not own the recipe (`invalid_permission`), or if
    /// the comment is empty.
    async fn update_review(&self, request: UpdateReviewRequest) -> Result<ReviewRecord, Error>;

    /// Permanently remove a review.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor, recipe, or review does not resolve, or
    /// if the actor may not delete the review (`invalid_permission`).
    async fn delete_review(
        &self,
        request: DeleteReviewRequest,
    ) -> Result<DeleteReviewResponse, Error>;
}

/// Fixture implementation for testing.
///
/// Echoes requests back without persisting anything or raising events.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewsCommand;

#[async_trait]
impl ReviewsCommand for FixtureReviewsCommand {
    async fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> Result<CreateReviewResponse, Error> {
        Ok(CreateReviewResponse {
            review: ReviewRecord {
                id: ReviewId::new(1),
                author_name: request.actor,
                comment: request.comment,
            },
            notification: None,
        })
    }

    async fn update_review(&self, request: UpdateReviewRequest) -> Result<ReviewRecord, Error> {
        Ok(ReviewRecord {
            id: request.review_id,
            author_name: request.actor,
            comment: request.comment,
        })
    }

    async fn delete_review(
        &self,
        request: DeleteReviewRequest,
    ) -> Result<DeleteReviewResponse, Error> {
        Ok(DeleteReviewResponse {
            review_id: request.review_id,
            message: crate::domain::REVIEW_DELETED_MESSAGE.to_owned(),
        })
    }
}
