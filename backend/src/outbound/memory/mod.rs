//! In-memory entity store.
//!
//! [`InMemoryStore`] implements the user, recipe, and review repositories
//! over a single `RwLock`ed state. Identifiers come from per-entity sequences
//! starting at 1. Listing order and window sizes follow the port contracts,
//! so services behave the same against this store as against a database.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use pagination::{PageRequest, SortDirection};

use crate::domain::ports::{
    RecipeRepository, RecipeRepositoryError, ReviewRepository, ReviewRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    NewRecipe, NewReview, Recipe, RecipeId, Review, ReviewId, User, UserId, UserName,
};

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserName, User>,
    recipes: BTreeMap<RecipeId, Recipe>,
    reviews: BTreeMap<ReviewId, Review>,
    last_recipe_id: i64,
    last_review_id: i64,
}

/// Poisoned lock, reported to callers as a query failure.
const POISONED: &str = "entity store lock poisoned";

/// Process-local store for users, recipes, and reviews.
///
/// # Examples
/// ```
/// use recipe_backend::domain::User;
/// use recipe_backend::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store
///     .insert_user(User::try_from_strings(15, "bjw", "Byeong Jun").expect("user"))
///     .expect("insert user");
/// assert_eq!(store.user_count().expect("count"), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, &'static str> {
        self.state.read().map_err(|_| POISONED)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, &'static str> {
        self.state.write().map_err(|_| POISONED)
    }

    /// Register or replace a user, keyed by user name.
    ///
    /// # Errors
    /// Returns [`UserRepositoryError::Query`] if the store lock is poisoned.
    pub fn insert_user(&self, user: User) -> Result<(), UserRepositoryError> {
        let mut state = self.write().map_err(UserRepositoryError::query)?;
        state.users.insert(user.user_name().clone(), user);
        Ok(())
    }

    /// Number of registered users.
    ///
    /// # Errors
    /// Returns [`UserRepositoryError::Query`] if the store lock is poisoned.
    pub fn user_count(&self) -> Result<usize, UserRepositoryError> {
        Ok(self.read().map_err(UserRepositoryError::query)?.users.len())
    }
}

fn window<'a, T, K>(
    rows: impl Iterator<Item = &'a T>,
    page: PageRequest,
    sort_key: impl Fn(&T) -> K,
) -> Vec<T>
where
    T: Clone + 'a,
    K: Ord,
{
    let mut rows: Vec<&T> = rows.collect();
    rows.sort_by_key(|row| sort_key(row));
    if page.direction() == SortDirection::Descending {
        rows.reverse();
    }
    rows.into_iter()
        .skip(page.offset())
        .take(page.window())
        .cloned()
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<User>, UserRepositoryError> {
        let state = self.read().map_err(UserRepositoryError::query)?;
        Ok(state.users.get(user_name).cloned())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryStore {
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let state = self.read().map_err(RecipeRepositoryError::query)?;
        Ok(state.recipes.get(id).cloned())
    }

    async fn insert(&self, recipe: NewRecipe) -> Result<Recipe, RecipeRepositoryError> {
        let mut state = self.write().map_err(RecipeRepositoryError::query)?;
        state.last_recipe_id += 1;
        let id = RecipeId::new(state.last_recipe_id);
        let stored = Recipe::builder(id, recipe.owner, recipe.content)
            .created_at(recipe.created_at)
            .build();
        state.recipes.insert(id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), RecipeRepositoryError> {
        let mut state = self.write().map_err(RecipeRepositoryError::query)?;
        let Some(slot) = state.recipes.get_mut(&recipe.id) else {
            return Err(RecipeRepositoryError::query(format!(
                "recipe {} is not stored",
                recipe.id
            )));
        };
        *slot = recipe.clone();
        Ok(())
    }

    async fn increment_views(
        &self,
        id: &RecipeId,
    ) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let mut state = self.write().map_err(RecipeRepositoryError::query)?;
        Ok(state.recipes.get_mut(id).map(|recipe| {
            recipe.record_view();
            recipe.clone()
        }))
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let state = self.read().map_err(RecipeRepositoryError::query)?;
        Ok(window(state.recipes.values(), page, |recipe| {
            (recipe.created_at, recipe.id)
        }))
    }

    async fn find_page_by_owner(
        &self,
        owner: &UserId,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let state = self.read().map_err(RecipeRepositoryError::query)?;
        let owned = state
            .recipes
            .values()
            .filter(|recipe| recipe.owner.id() == *owner);
        Ok(window(owned, page, |recipe| (recipe.created_at, recipe.id)))
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        let state = self.read().map_err(ReviewRepositoryError::query)?;
        Ok(state.reviews.get(id).cloned())
    }

    async fn insert(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        let mut state = self.write().map_err(ReviewRepositoryError::query)?;
        state.last_review_id += 1;
        let stored = review.into_review(ReviewId::new(state.last_review_id));
        state.reviews.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        let mut state = self.write().map_err(ReviewRepositoryError::query)?;
        let Some(slot) = state.reviews.get_mut(&review.id) else {
            return Err(ReviewRepositoryError::query(format!(
                "review {} is not stored",
                review.id
            )));
        };
        *slot = review.clone();
        Ok(())
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewRepositoryError> {
        let mut state = self.write().map_err(ReviewRepositoryError::query)?;
        Ok(state.reviews.remove(id).is_some())
    }

    async fn find_page_by_recipe(
        &self,
        recipe_id: &RecipeId,
        page: PageRequest,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        let state = self.read().map_err(ReviewRepositoryError::query)?;
        let reviews = state
            .reviews
            .values()
            .filter(|review| review.recipe_id == *recipe_id);
        Ok(window(reviews, page, |review| (review.created_at, review.id)))
    }
}
