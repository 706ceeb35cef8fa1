//! Recipe service implementing the recipe driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest, SortDirection};
use tracing::{debug, info, warn};

use super::{RecipeDetail, RecipeSummary};
use crate::domain::ports::{
    CreateRecipeRequest, RecipeRepository, RecipeRepositoryError, RecipesCommand, RecipesQuery,
    UpdateRecipeRequest, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, NewRecipe, Recipe, RecipeContent, RecipeId, User, UserName};

/// Recipe service generic over its repositories.
#[derive(Clone)]
pub struct RecipeService<U, R> {
    users: Arc<U>,
    recipes: Arc<R>,
    clock: Arc<dyn Clock>,
    page_size: u32,
}

impl<U, R> RecipeService<U, R> {
    /// Create a service listing [`DEFAULT_PAGE_SIZE`] recipes per page.
    pub fn new(users: Arc<U>, recipes: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            recipes,
            clock,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the default listing page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// First page of a listing at the configured size.
    pub fn first_page(&self) -> PageRequest {
        PageRequest::first(self.page_size).with_direction(SortDirection::Descending)
    }
}

impl<U, R> RecipeService<U, R>
where
    U: UserRepository,
    R: RecipeRepository,
{
    async fn resolve_actor(&self, actor: &str) -> Result<User, Error> {
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
}

fn parse_content(title: String, body: String) -> Result<RecipeContent, Error> {
    RecipeContent::new(title, body).map_err(|error| Error::empty_content(error.field()))
}

fn summarise(rows: Vec<Recipe>, page: PageRequest) -> Result<Page<RecipeSummary>, Error> {
    Page::from_window(rows, page)
        .map(|recipes| recipes.map(|recipe| RecipeSummary::from(&recipe)))
        .map_err(|err| Error::internal(format!("failed to encode page cursor: {err}")))
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

#[async_trait]
impl<U, R> RecipesCommand for RecipeService<U, R>
where
    U: UserRepository,
    R: RecipeRepository,
{
    async fn create_recipe(&self, request: CreateRecipeRequest) -> Result<RecipeDetail, Error> {
        let owner = self.resolve_actor(&request.actor).await?;
        let content = parse_content(request.title, request.body)?;

        let recipe = self
            .recipes
            .insert(NewRecipe {
                owner,
                content,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(map_recipe_error)?;
        info!(recipe_id = %recipe.id, owner = %recipe.owner.user_name(), "recipe created");

        Ok(RecipeDetail::from(&recipe))
    }

    async fn update_recipe(&self, request: UpdateRecipeRequest) -> Result<RecipeDetail, Error> {
        let mut recipe = self.resolve_recipe(request.recipe_id).await?;
        let actor = self.resolve_actor(&request.actor).await?;
        if !recipe.is_owned_by(&actor) {
            warn!(
                recipe_id = %recipe.id,
                actor = %actor.user_name(),
                "recipe update denied"
            );
            return Err(Error::invalid_permission(
                "only the owner may update this recipe",
            ));
        }
        let content = parse_content(request.title, request.body)?;

        recipe.revise(content, self.clock.utc());
        self.recipes.save(&recipe).await.map_err(map_recipe_error)?;
        debug!(recipe_id = %recipe.id, "recipe updated");

        Ok(RecipeDetail::from(&recipe))
    }
}

#[async_trait]
impl<U, R> RecipesQuery for RecipeService<U, R>
where
    U: UserRepository,
    R: RecipeRepository,
{
    async fn find_recipe(&self, recipe_id: RecipeId) -> Result<RecipeDetail, Error> {
        let recipe = self
            .recipes
            .increment_views(&recipe_id)
            .await
            .map_err(map_recipe_error)?
            .ok_or_else(|| Error::recipe_not_found(recipe_id))?;
        Ok(RecipeDetail::from(&recipe))
    }

    async fn list_recipes(&self, page: PageRequest) -> Result<Page<RecipeSummary>, Error> {
        let page = page.with_direction(SortDirection::Descending);
        let rows = self
            .recipes
            .find_page(page)
            .await
            .map_err(map_recipe_error)?;
        summarise(rows, page)
    }

    async fn my_recipes(
        &self,
        actor: &str,
        page: PageRequest,
    ) -> Result<Page<RecipeSummary>, Error> {
        let owner = self.resolve_actor(actor).await?;
        let page = page.with_direction(SortDirection::Descending);
        let rows = self
            .recipes
            .find_page_by_owner(&owner.id(), page)
            .await
            .map_err(map_recipe_error)?;
        summarise(rows, page)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
