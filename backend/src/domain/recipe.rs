//! Recipe aggregate.
//!
//! A recipe is owned by the user who wrote it. Only the owner may edit its
//! content; every detail view bumps the view counter.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::User;

/// Numeric recipe identifier assigned by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(i64);

impl RecipeId {
    /// Wrap a raw store identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for recipe content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecipeValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("body must not be empty")]
    EmptyBody,
}

impl RecipeValidationError {
    /// Name of the offending field.
    pub const fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyBody => "body",
        }
    }
}

/// Title and body of a recipe, both non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeContent {
    title: String,
    body: String,
}

impl RecipeContent {
    /// Validate and construct recipe content.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, RecipeValidationError> {
        let title = title.into();
        let body = body.into();
        if title.is_empty() {
            return Err(RecipeValidationError::EmptyTitle);
        }
        if body.is_empty() {
            return Err(RecipeValidationError::EmptyBody);
        }
        Ok(Self { title, body })
    }

    /// Recipe title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Recipe instructions.
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}

/// A persisted recipe.
///
/// # Examples
///
/// ```
/// # use recipe_backend::domain::{Recipe, RecipeContent, RecipeId, User};
/// let owner = User::try_from_strings(15, "bjw", "Byeong Jun").expect("user");
/// let content = RecipeContent::new("Inari sushi", "Like this").expect("content");
/// let mut recipe = Recipe::builder(RecipeId::new(1), owner, content)
///     .view_count(12)
///     .build();
///
/// recipe.record_view();
/// assert_eq!(recipe.view_count, 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store identifier.
    pub id: RecipeId,
    /// Title and body.
    pub content: RecipeContent,
    /// The user who wrote the recipe.
    pub owner: User,
    /// Number of detail views.
    pub view_count: u64,
    /// Number of likes.
    pub like_count: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a builder with required fields.
    pub fn builder(id: RecipeId, owner: User, content: RecipeContent) -> RecipeBuilder {
        RecipeBuilder::new(id, owner, content)
    }

    /// Count one detail view.
    pub fn record_view(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }

    /// Replace the content and refresh the update timestamp.
    pub fn revise(&mut self, content: RecipeContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    /// Whether `user` owns this recipe.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner.is_same_identity(user)
    }
}

/// Builder for constructing [`Recipe`] incrementally.
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    id: RecipeId,
    owner: User,
    content: RecipeContent,
    view_count: u64,
    like_count: u64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl RecipeBuilder {
    /// Create a new builder with required fields.
    pub fn new(id: RecipeId, owner: User, content: RecipeContent) -> Self {
        Self {
            id,
            owner,
            content,
            view_count: 0,
            like_count: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the view counter.
    pub fn view_count(mut self, views: u64) -> Self {
        self.view_count = views;
        self
    }

    /// Set the like counter.
    pub fn like_count(mut self, likes: u64) -> Self {
        self.like_count = likes;
        self
    }

    /// Set the creation timestamp.
    pub fn created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Set the update timestamp.
    pub fn updated_at(mut self, ts: DateTime<Utc>) -> Self {
        self.updated_at = Some(ts);
        self
    }

    /// Build the final [`Recipe`]. Missing timestamps default to now.
    pub fn build(self) -> Recipe {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        Recipe {
            id: self.id,
            content: self.content,
            owner: self.owner,
            view_count: self.view_count,
            like_count: self.like_count,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}

/// A recipe that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    /// The user creating the recipe.
    pub owner: User,
    /// Title and body.
    pub content: RecipeContent,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
