//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed entities of the recipe community and
//! the services that enforce their business rules. Nothing in here knows
//! about transports or storage engines; collaborators are reached through
//! the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: tagged failure returned by every operation.
//! - User, Recipe, Review: entities and their value objects.
//! - ReviewAuthorizer: pure permission decisions for review mutations.
//! - ReviewService, RecipeService: driving port implementations.

pub mod authorization;
pub mod error;
pub mod notification;
pub mod ports;
pub mod recipe;
pub mod recipes;
pub mod review;
pub mod reviews;
pub mod trace_id;
pub mod user;

pub use self::authorization::{Decision, DeleteRoleRule, ReviewAuthorizer};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::notification::{NotificationKind, ReviewNotification};
pub use self::recipe::{
    NewRecipe, Recipe, RecipeBuilder, RecipeContent, RecipeId, RecipeValidationError,
};
pub use self::recipes::{RecipeDetail, RecipeService, RecipeSummary};
pub use self::review::{NewReview, Review, ReviewComment, ReviewId, ReviewValidationError};
pub use self::reviews::{
    NotifyingReviewsCommand, REVIEW_DELETED_MESSAGE, REVIEW_PAGE_SIZE, ReviewList,
    ReviewListing, ReviewRecord, ReviewService,
};
pub use self::trace_id::TraceId;
pub use self::user::{
    DISPLAY_NAME_MAX, DisplayName, USER_NAME_MAX, User, UserId, UserName, UserRole,
    UserValidationError,
};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use recipe_backend::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::user_not_found("ghost"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
