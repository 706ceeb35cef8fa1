//! `recipe-reviews` entry point: seeds an in-memory community and walks a
//! review through its lifecycle, logging each outcome.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use recipe_backend::domain::ports::{
    CreateRecipeRequest, CreateReviewRequest, DeleteReviewRequest, RecipesCommand, RecipesQuery,
    ReviewsCommand, ReviewsQuery, UpdateReviewRequest,
};
use recipe_backend::domain::{
    Error, NotifyingReviewsCommand, RecipeService, ReviewService, TraceId, User, UserRole,
};
use recipe_backend::outbound::memory::InMemoryStore;
use recipe_backend::outbound::notifications::TracingNotificationPublisher;
use recipe_backend::settings::ReviewSettings;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `recipe-reviews` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recipe-reviews",
    about = "Walk a recipe review through create, update, list, and delete",
    version
)]
struct CliArgs {
    /// Comment the visiting user leaves on the seeded recipe.
    #[arg(long, default_value = "Looks delicious!")]
    comment: String,
    /// Replacement comment written by the recipe owner.
    #[arg(long = "revised-comment", default_value = "Thanks for trying it")]
    revised_comment: String,
    /// User who deletes the review at the end of the walk.
    #[arg(long = "delete-as", default_value = "admin")]
    delete_as: String,
    /// Restrict deletion to the review author, overriding configuration.
    #[arg(long = "legacy-delete-rule")]
    legacy_delete_rule: bool,
    /// Skip the walkthrough, overriding configuration.
    #[arg(long = "no-demo")]
    no_demo: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply(&self, mut settings: ReviewSettings) -> ReviewSettings {
        if self.legacy_delete_rule {
            settings.legacy_delete_rule = Some(true);
        }
        if self.no_demo {
            settings.seed_demo_data = Some(false);
        }
        settings
    }
}

/// Outcome of one walkthrough, logged step by step as it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WalkthroughReport {
    notified_owner: bool,
    stranger_update_denied: bool,
    listed_reviews: usize,
    review_deleted: bool,
    recipe_views: u64,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = ReviewSettings::load_from_iter([OsString::from("recipe-reviews")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let settings = args.apply(settings);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    let report = runtime
        .block_on(run(args, settings))
        .map_err(|error| io::Error::other(error.to_string()))?;
    if let Some(report) = report {
        info!(
            notified_owner = report.notified_owner,
            stranger_update_denied = report.stranger_update_denied,
            listed_reviews = report.listed_reviews,
            review_deleted = report.review_deleted,
            recipe_views = report.recipe_views,
            "walkthrough complete"
        );
    }
    Ok(())
}

fn seed_users(store: &InMemoryStore) -> Result<(), Error> {
    let users = [
        User::try_from_strings(1, "bjw", "Byeong Jun"),
        User::try_from_strings(2, "kp", "Kim Park"),
        User::try_from_strings(3, "admin", "Site Admin")
            .map(|user| user.with_role(UserRole::Admin)),
    ];
    for user in users {
        let user = user.map_err(|error| Error::internal(format!("invalid seed user: {error}")))?;
        store
            .insert_user(user)
            .map_err(|error| Error::internal(error.to_string()))?;
    }
    Ok(())
}

async fn run(
    args: CliArgs,
    settings: ReviewSettings,
) -> Result<Option<WalkthroughReport>, Error> {
    let store = Arc::new(InMemoryStore::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let recipes = RecipeService::new(store.clone(), store.clone(), clock.clone())
        .with_page_size(settings.recipe_page_size());
    let reviews = Arc::new(
        ReviewService::new(store.clone(), store.clone(), store.clone(), clock)
            .with_authorizer(settings.authorizer()),
    );
    let commands =
        NotifyingReviewsCommand::new(reviews.clone(), Arc::new(TracingNotificationPublisher));

    if !settings.seed_demo_data() {
        info!("demo data disabled; nothing to do");
        return Ok(None);
    }
    seed_users(&store)?;

    TraceId::instrument("review_walkthrough", async move {
        let recipe = recipes
            .create_recipe(CreateRecipeRequest {
                title: "Inari sushi".to_owned(),
                body: "Season the rice, then stuff the pockets.".to_owned(),
                actor: "bjw".to_owned(),
            })
            .await?;
        info!(recipe_id = %recipe.id, "recipe published");

        let created = commands
            .create_review(CreateReviewRequest {
                recipe_id: recipe.id,
                comment: args.comment,
                actor: "kp".to_owned(),
            })
            .await?;
        info!(
            review_id = %created.review.id,
            notified = created.notification.is_some(),
            "review created"
        );

        let denied = commands
            .update_review(UpdateReviewRequest {
                recipe_id: recipe.id,
                review_id: created.review.id,
                comment: "edited by a stranger".to_owned(),
                actor: "kp".to_owned(),
            })
            .await;
        let stranger_update_denied = match denied {
            Ok(_) => false,
            Err(error) => {
                info!(code = ?error.code(), "non-owner update rejected");
                true
            }
        };

        let updated = commands
            .update_review(UpdateReviewRequest {
                recipe_id: recipe.id,
                review_id: created.review.id,
                comment: args.revised_comment,
                actor: "bjw".to_owned(),
            })
            .await?;
        info!(review_id = %updated.id, comment = %updated.comment, "review updated");

        let listing = reviews.list_reviews(recipe.id).await?;
        info!(count = listing.reviews.len(), "reviews listed");

        let review_deleted = match commands
            .delete_review(DeleteReviewRequest {
                recipe_id: recipe.id,
                review_id: created.review.id,
                actor: args.delete_as.clone(),
            })
            .await
        {
            Ok(deleted) => {
                info!(
                    review_id = %deleted.review_id,
                    message = %deleted.message,
                    "review deleted"
                );
                true
            }
            Err(error) => {
                warn!(
                    actor = %args.delete_as,
                    code = ?error.code(),
                    "review delete rejected"
                );
                false
            }
        };

        let detail = recipes.find_recipe(recipe.id).await?;
        info!(recipe_id = %detail.id, views = detail.view_count, "recipe viewed");
        Ok::<_, Error>(Some(WalkthroughReport {
            notified_owner: created.notification.is_some(),
            stranger_update_denied,
            listed_reviews: listing.reviews.len(),
            review_deleted,
            recipe_views: detail.view_count,
        }))
    })
    .await
}
