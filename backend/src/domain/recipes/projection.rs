//! Response-shaped views of recipes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Recipe, RecipeId};

/// Full recipe view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Recipe identifier.
    pub id: RecipeId,
    /// Recipe title.
    pub title: String,
    /// Recipe instructions.
    pub body: String,
    /// Display name of the owner.
    pub owner_name: String,
    /// Views recorded so far.
    pub view_count: u64,
    /// Likes recorded so far.
    pub like_count: u64,
    /// When the recipe was published.
    pub created_at: DateTime<Utc>,
    /// When the recipe was last edited.
    pub updated_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.content.title().to_owned(),
            body: recipe.content.body().to_owned(),
            owner_name: recipe.owner.display_name().to_string(),
            view_count: recipe.view_count,
            like_count: recipe.like_count,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

/// Listing row for a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Recipe identifier.
    pub id: RecipeId,
    /// Recipe title.
    pub title: String,
    /// Display name of the owner.
    pub owner_name: String,
    /// Views recorded so far.
    pub view_count: u64,
    /// Likes recorded so far.
    pub like_count: u64,
    /// When the recipe was published.
    pub created_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.content.title().to_owned(),
            owner_name: recipe.owner.display_name().to_string(),
            view_count: recipe.view_count,
            like_count: recipe.like_count,
            created_at: recipe.created_at,
        }
    }
}
