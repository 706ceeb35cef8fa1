//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod notification_publisher;
mod recipe_repository;
mod recipes_command;
mod recipes_query;
mod review_repository;
mod reviews_command;
mod reviews_query;
mod user_repository;

#[cfg(test)]
pub use notification_publisher::MockNotificationPublisher;
pub use notification_publisher::{NotificationPublisher, NotificationPublisherError};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{FixtureRecipeRepository, RecipeRepository, RecipeRepositoryError};
#[cfg(test)]
pub use recipes_command::MockRecipesCommand;
pub use recipes_command::{CreateRecipeRequest, RecipesCommand, UpdateRecipeRequest};
#[cfg(test)]
pub use recipes_query::MockRecipesQuery;
pub use recipes_query::{FixtureRecipesQuery, RecipesQuery};
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{FixtureReviewRepository, ReviewRepository, ReviewRepositoryError};
#[cfg(test)]
pub use reviews_command::MockReviewsCommand;
pub use reviews_command::{
    CreateReviewRequest, CreateReviewResponse, DeleteReviewRequest, DeleteReviewResponse,
    FixtureReviewsCommand, ReviewsCommand, UpdateReviewRequest,
};
#[cfg(test)]
pub use reviews_query::MockReviewsQuery;
pub use reviews_query::ReviewsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
