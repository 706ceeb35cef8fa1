//! Response-shaped views of reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Review, ReviewId, User};

/// Record returned by review creation and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Review identifier.
    pub id: ReviewId,
    /// Display name of the acting user.
    pub author_name: String,
    /// Current review text.
    pub comment: String,
}

impl ReviewRecord {
    pub(crate) fn new(review: &Review, actor: &User) -> Self {
        Self {
            id: review.id,
            author_name: actor.display_name().to_string(),
            comment: review.comment.as_ref().to_owned(),
        }
    }
}

/// One row of a recipe's review listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListing {
    /// Review identifier.
    pub id: ReviewId,
    /// Display name of the review's author.
    pub author_name: String,
    /// Review text.
    pub comment: String,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
    /// When the review was last edited.
    pub updated_at: DateTime<Utc>,
}

impl From<&Review> for ReviewListing {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            author_name: review.author.display_name().to_string(),
            comment: review.comment.as_ref().to_owned(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Ordered review listing for one recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewList {
    /// Rows, oldest first.
    pub reviews: Vec<ReviewListing>,
}

impl FromIterator<ReviewListing> for ReviewList {
    fn from_iter<I: IntoIterator<Item = ReviewListing>>(iter: I) -> Self {
        Self {
            reviews: iter.into_iter().collect(),
        }
    }
}
