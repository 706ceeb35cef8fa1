//! Review lifecycle service.
//!
//! Every operation performs its lookups first and at most one write last, so
//! a failure never leaves a partial mutation behind.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{PageRequest, SortDirection};
use tracing::{debug, info, warn};

use super::{ReviewList, ReviewListing, ReviewRecord};
use crate::domain::ports::{
    CreateReviewRequest, CreateReviewResponse, DeleteReviewRequest, DeleteReviewResponse,
    RecipeRepository, RecipeRepositoryError, ReviewRepository, ReviewRepositoryError,
    ReviewsCommand, ReviewsQuery, UpdateReviewRequest, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Error, NewReview, Recipe, RecipeId, Review, ReviewAuthorizer, ReviewComment, ReviewId,
    ReviewNotification, User, UserName,
};

/// Number of reviews returned by a listing.
pub const REVIEW_PAGE_SIZE: u32 = 20;

/// Confirmation text returned after a review is deleted.
pub const REVIEW_DELETED_MESSAGE: &str = "review deleted";

/// Review service implementing [`ReviewsCommand`] and [`ReviewsQuery`].
#[derive(Clone)]
pub struct ReviewService<U, R, V> {
    users: Arc<U>,
    recipes: Arc<R>,
    reviews: Arc<V>,
    clock: Arc<dyn Clock>,
    authorizer: ReviewAuthorizer,
}

impl<U, R, V> ReviewService<U, R, V> {
    /// Create a service using the corrected delete rule.
    pub fn new(users: Arc<U>, recipes: Arc<R>, reviews: Arc<V>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            recipes,
            reviews,
            clock,
            authorizer: ReviewAuthorizer::default(),
        }
    }

    /// Replace the authorizer.
    #[must_use]
    pub fn with_authorizer(mut self, authorizer: ReviewAuthorizer) -> Self {
        self.authorizer = authorizer;
        self
    }
}

impl<U, R, V> ReviewService<U, R, V>
where
    U: UserRepository,
    R: RecipeRepository,
    V: ReviewRepository,
{
    async fn resolve_actor(&self, actor: &str) -> Result<User, Error> {
        // A name that fails validation cannot belong to any stored user.
        let Ok(user_name) = UserName::new(actor) else {
            return Err(Error::user_not_found(actor));
        };
        self.users
            .find_by_user_name(&user_name)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::user_not_found(actor))
    }

    async fn resolve_recipe(&self, recipe_id: RecipeId) -> Result<Recipe, Error> {
        self.recipes
            .find_by_id(&recipe_id)
            .await
            .map_err(map_recipe_error)?
            .ok_or_else(|| Error::recipe_not_found(recipe_id))
    }

    /// Resolve a review addressed through `recipe_id`.
    ///
    /// A review that exists but belongs to another recipe is reported as
    /// missing.
    async fn resolve_review(
        &self,
        recipe_id: RecipeId,
        review_id: ReviewId,
    ) -> Result<Review, Error> {
        self.reviews
            .find_by_id(&review_id)
            .await
            .map_err(map_review_error)?
            .filter(|review| review.recipe_id == recipe_id)
            .ok_or_else(|| Error::review_not_found(review_id))
    }
}

fn parse_comment(comment: String) -> Result<ReviewComment, Error> {
    ReviewComment::new(comment).map_err(|_| Error::empty_content("comment"))
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_recipe_error(error: RecipeRepositoryError) -> Error {
    match error {
        RecipeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipeRepositoryError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
    }
}

fn map_review_error(error: ReviewRepositoryError) -> Error {
    match error {
        ReviewRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("review repository unavailable: {message}"))
        }
        ReviewRepositoryError::Query { message } => {
            Error::internal(format!("review repository error: {message}"))
        }
    }
}

#[async_trait]
impl<U, R, V> ReviewsCommand for ReviewService<U, R, V>
where
    U: UserRepository,
    R: RecipeRepository,
    V: ReviewRepository,
{
    async fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> Result<CreateReviewResponse, Error> {
        let actor = self.resolve_actor(&request.actor).await?;
        let recipe = self.resolve_recipe(request.recipe_id).await?;
        let comment = parse_comment(request.comment)?;
        if !self.authorizer.can_create(&actor).is_allowed() {
            return Err(Error::invalid_permission("not allowed to review this recipe"));
        }

        let review = self
            .reviews
            .insert(NewReview {
                comment,
                author: actor.clone(),
                recipe_id: recipe.id,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(map_review_error)?;
        info!(
            recipe_id = %recipe.id,
            review_id = %review.id,
            actor = %actor.user_name(),
            "review created"
        );

        Ok(CreateReviewResponse {
            review: ReviewRecord::new(&review, &actor),
            notification: ReviewNotification::new_review(&actor, &recipe),
        })
    }

    async fn update_review(&self, request: UpdateReviewRequest) -> Result<ReviewRecord, Error> {
        let actor = self.resolve_actor(&request.actor).await?;
        let recipe = self.resolve_recipe(request.recipe_id).await?;
        if !self.authorizer.can_update(&actor, &recipe.owner).is_allowed() {
            warn!(
                recipe_id = %recipe.id,
                review_id = %request.review_id,
                actor = %actor.user_name(),
                "review update denied"
            );
            return Err(Error::invalid_permission(
                "only the recipe owner may update its reviews",
            ));
        }
        let mut review = self.resolve_review(recipe.id, request.review_id).await?;
        let comment = parse_comment(request.comment)?;

        review.revise(comment, self.clock.utc());
        self.reviews.save(&review).await.map_err(map_review_error)?;
        debug!(review_id = %review.id, "review updated");

        Ok(ReviewRecord::new(&review, &actor))
    }

    async fn delete_review(
        &self,
        request: DeleteReviewRequest,
    ) -> Result<DeleteReviewResponse, Error> {
        let actor = self.resolve_actor(&request.actor).await?;
        let recipe = self.resolve_recipe(request.recipe_id).await?;
        let review = self.resolve_review(recipe.id, request.review_id).await?;
        if !self.authorizer.can_delete(&actor, &review.author).is_allowed() {
            warn!(
                recipe_id = %recipe.id,
                review_id = %review.id,
                actor = %actor.user_name(),
                rule = ?self.authorizer.delete_rule(),
                "review delete denied"
            );
            return Err(Error::invalid_permission(
                "only the author or a moderator may delete this review",
            ));
        }

        let deleted = self
            .reviews
            .delete(&review.id)
            .await
            .map_err(map_review_error)?;
        if !deleted {
            // Removed by someone else between lookup and delete.
            return Err(Error::review_not_found(review.id));
        }
        info!(review_id = %review.id, actor = %actor.user_name(), "review deleted");

        Ok(DeleteReviewResponse {
            review_id: review.id,
            message: REVIEW_DELETED_MESSAGE.to_owned(),
        })
    }
}

#[async_trait]
impl<U, R, V> ReviewsQuery for ReviewService<U, R, V>
where
    U: UserRepository,
    R: RecipeRepository,
    V: ReviewRepository,
{
    async fn list_reviews(&self, recipe_id: RecipeId) -> Result<ReviewList, Error> {
        let recipe = self.resolve_recipe(recipe_id).await?;
        let page = PageRequest::first(REVIEW_PAGE_SIZE).with_direction(SortDirection::Ascending);
        let rows = self
            .reviews
            .find_page_by_recipe(&recipe.id, page)
            .await
            .map_err(map_review_error)?;

        Ok(rows
            .iter()
            .take(page.limit())
            .map(ReviewListing::from)
            .collect())
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
