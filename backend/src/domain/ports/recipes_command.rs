//! Driving port for writing recipes.

use async_trait::async_trait;

use crate::domain::{Error, RecipeDetail, RecipeId};

/// Request to publish a new recipe.
#[derive(Debug, Clone)]
pub struct CreateRecipeRequest {
    /// Recipe title; must not be empty.
    pub title: String,
    /// Recipe instructions; must not be empty.
    pub body: String,
    /// Login name of the acting user.
    pub actor: String,
}

/// Request to edit an existing recipe.
#[derive(Debug, Clone)]
pub struct UpdateRecipeRequest {
    /// Recipe to edit.
    pub recipe_id: RecipeId,
    /// Replacement title.
    pub title: String,
    /// Replacement instructions.
    pub body: String,
    /// Login name of the acting user.
    pub actor: String,
}

/// Driving port for recipe creation and editing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipesCommand: Send + Sync {
    /// Publish a recipe owned by the actor.
    ///
    /// # Errors
    ///
    /// Returns `user_not_found` for unknown actors and `empty_content` when
    /// the title or body is empty.
    async fn create_recipe(&self, request: CreateRecipeRequest) -> Result<RecipeDetail, Error>;

    /// Replace a recipe's title and body. Only the owner may do this.
    ///
    /// # Errors
    ///
    /// Returns `recipe_not_found`, `user_not_found`, `invalid_permission`, or
    /// `empty_content`.
    async fn update_recipe(&self, request: UpdateRecipeRequest) -> Result<RecipeDetail, Error>;
}
