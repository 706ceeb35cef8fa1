//! Driving port for reading recipes.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, RecipeDetail, RecipeId, RecipeSummary};

/// Driving port for recipe detail and listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipesQuery: Send + Sync {
    /// Show one recipe, counting the view.
    ///
    /// Every successful call increments the stored view count by one, and
    /// the returned record already includes that view.
    ///
    /// # Errors
    ///
    /// Returns `recipe_not_found` when the recipe does not exist.
    async fn find_recipe(&self, recipe_id: RecipeId) -> Result<RecipeDetail, Error>;

    /// List all recipes, newest first.
    async fn list_recipes(&self, page: PageRequest) -> Result<Page<RecipeSummary>, Error>;

    /// List the actor's own recipes, newest first.
    ///
    /// # Errors
    ///
    /// Returns `user_not_found` for unknown actors.
    async fn my_recipes(
        &self,
        actor: &str,
        page: PageRequest,
    ) -> Result<Page<RecipeSummary>, Error>;
}

/// Fixture implementation with no recipes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipesQuery;

#[async_trait]
impl RecipesQuery for FixtureRecipesQuery {
    async fn find_recipe(&self, recipe_id: RecipeId) -> Result<RecipeDetail, Error> {
        Err(Error::recipe_not_found(recipe_id))
    }

    async fn list_recipes(&self, page: PageRequest) -> Result<Page<RecipeSummary>, Error> {
        empty_page(page)
    }

    async fn my_recipes(
        &self,
        _actor: &str,
        page: PageRequest,
    ) -> Result<Page<RecipeSummary>, Error> {
        empty_page(page)
    }
}

fn empty_page(page: PageRequest) -> Result<Page<RecipeSummary>, Error> {
    Page::from_window(Vec::new(), page)
        .map_err(|err| Error::internal(format!("failed to build page: {err}")))
}
