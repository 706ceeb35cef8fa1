//! Review entity and its comment value object.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{RecipeId, User};

/// Numeric review identifier assigned by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

impl ReviewId {
    /// Wrap a raw store identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for review input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("comment must not be empty")]
    EmptyComment,
}

/// Review text.
///
/// Zero-length input is rejected. Whitespace is kept verbatim: a comment made
/// only of spaces is still a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReviewComment(String);

impl ReviewComment {
    /// Validate and construct a [`ReviewComment`].
    pub fn new(comment: impl Into<String>) -> Result<Self, ReviewValidationError> {
        Self::from_owned(comment.into())
    }

    fn from_owned(comment: String) -> Result<Self, ReviewValidationError> {
        if comment.is_empty() {
            return Err(ReviewValidationError::EmptyComment);
        }
        Ok(Self(comment))
    }
}

impl AsRef<str> for ReviewComment {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ReviewComment> for String {
    fn from(value: ReviewComment) -> Self {
        value.0
    }
}

impl TryFrom<String> for ReviewComment {
    type Error = ReviewValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A persisted review.
///
/// ## Invariants
/// - `author` and `recipe_id` referenced existing entities when the review
///   was created.
/// - `updated_at` is never earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Store identifier.
    pub id: ReviewId,
    /// Review text.
    pub comment: ReviewComment,
    /// The user who wrote the review.
    pub author: User,
    /// The reviewed recipe.
    pub recipe_id: RecipeId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Replace the comment in place and refresh the update timestamp.
    ///
    /// # Examples
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use recipe_backend::domain::{RecipeId, Review, ReviewComment, ReviewId, User};
    /// let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("timestamp");
    /// let mut review = Review {
    ///     id: ReviewId::new(5),
    ///     comment: ReviewComment::new("first").expect("comment"),
    ///     author: User::try_from_strings(2, "kp", "Kim Park").expect("user"),
    ///     recipe_id: RecipeId::new(1),
    ///     created_at: created,
    ///     updated_at: created,
    /// };
    ///
    /// let later = created + chrono::TimeDelta::hours(1);
    /// review.revise(ReviewComment::new("second").expect("comment"), later);
    /// assert_eq!(review.comment.as_ref(), "second");
    /// assert_eq!(review.updated_at, later);
    /// ```
    pub fn revise(&mut self, comment: ReviewComment, now: DateTime<Utc>) {
        self.comment = comment;
        self.updated_at = now.max(self.created_at);
    }
}

/// A review that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Validated review text.
    pub comment: ReviewComment,
    /// User writing the review.
    pub author: User,
    /// Recipe being reviewed.
    pub recipe_id: RecipeId,
    /// Creation time, also used as the initial modification time.
    pub created_at: DateTime<Utc>,
}

impl NewReview {
    /// Attach a store identifier, producing the persisted form.
    pub fn into_review(self, id: ReviewId) -> Review {
        Review {
            id,
            comment: self.comment,
            author: self.author,
            recipe_id: self.recipe_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case(" ", true)]
    #[case("Delicious", true)]
    fn comment_only_rejects_zero_length(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(ReviewComment::new(raw).is_ok(), accepted);
    }

    #[rstest]
    fn deserialisation_rejects_empty_comment() {
        assert!(serde_json::from_str::<ReviewComment>("\"\"").is_err());
    }

    #[rstest]
    fn into_review_starts_with_matching_timestamps() {
        let created = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("timestamp");
        let review = NewReview {
            comment: ReviewComment::new("nice").expect("comment"),
            author: User::try_from_strings(2, "kp", "Kim Park").expect("user"),
            recipe_id: RecipeId::new(1),
            created_at: created,
        }
        .into_review(ReviewId::new(9));

        assert_eq!(review.id, ReviewId::new(9));
        assert_eq!(review.created_at, review.updated_at);
        assert_eq!(review.author.user_name().as_ref(), "kp");
    }
}
