//! Port for recipe persistence.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{NewRecipe, Recipe, RecipeId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
    }
}

/// Storage for recipes.
///
/// # Paging
///
/// Listing methods return recipes newest first (creation time, then id, both
/// descending) and yield at most [`PageRequest::window`] rows: one more than
/// the page size, so callers can tell whether another page follows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetch a recipe by id. Returns `None` when it does not exist.
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError>;

    /// Persist a new recipe and return it with its assigned id.
    async fn insert(&self, recipe: NewRecipe) -> Result<Recipe, RecipeRepositoryError>;

    /// Overwrite an existing recipe.
    async fn save(&self, recipe: &Recipe) -> Result<(), RecipeRepositoryError>;

    /// Add one view to a stored recipe without touching its other fields.
    ///
    /// Returns the recipe as stored after the increment, or `None` when it
    /// does not exist.
    async fn increment_views(&self, id: &RecipeId)
    -> Result<Option<Recipe>, RecipeRepositoryError>;

    /// Fetch one window of all recipes.
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Fetch one window of the recipes owned by `owner`.
    async fn find_page_by_owner(
        &self,
        owner: &UserId,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError>;
}

/// Fixture implementation with no stored recipes.
///
/// Inserts echo the recipe back with id `1` and are otherwise discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeRepository;

#[async_trait]
impl RecipeRepository for FixtureRecipeRepository {
    async fn find_by_id(&self, _id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, recipe: NewRecipe) -> Result<Recipe, RecipeRepositoryError> {
        Ok(Recipe::builder(RecipeId::new(1), recipe.owner, recipe.content)
            .created_at(recipe.created_at)
            .build())
    }

    async fn save(&self, _recipe: &Recipe) -> Result<(), RecipeRepositoryError> {
        Ok(())
    }

    async fn increment_views(
        &self,
        _id: &RecipeId,
    ) -> Result<Option<Recipe>, RecipeRepositoryError> {
        Ok(None)
    }

    async fn find_page(&self, _page: PageRequest) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_page_by_owner(
        &self,
        _owner: &UserId,
        _page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        Ok(Vec::new())
    }
}
