//! Cross-user notification payloads produced by the review lifecycle.

use serde::{Deserialize, Serialize};

use super::{Recipe, User};

/// Kind of event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum NotificationKind {
    /// Someone other than the owner reviewed a recipe.
    NewReviewOnRecipe,
}

/// Event payload handed to a notification publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewNotification {
    /// What happened.
    pub kind: NotificationKind,
    /// The user who caused the event.
    pub actor: User,
    /// The user who should be told about it.
    pub recipient: User,
    /// The recipe the event relates to.
    pub recipe: Recipe,
}

impl ReviewNotification {
    /// Build a "new review on recipe" event addressed to the recipe owner.
    ///
    /// Returns `None` when the actor owns the recipe.
    pub fn new_review(actor: &User, recipe: &Recipe) -> Option<Self> {
        if recipe.is_owned_by(actor) {
            return None;
        }
        Some(Self {
            kind: NotificationKind::NewReviewOnRecipe,
            actor: actor.clone(),
            recipient: recipe.owner.clone(),
            recipe: recipe.clone(),
        })
    }
}
