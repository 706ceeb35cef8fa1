//! Behavioural tests for the review lifecycle against the in-memory store.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use recipe_backend::domain::ports::{
    CreateRecipeRequest, CreateReviewRequest, DeleteReviewRequest, RecipesCommand, RecipesQuery,
    ReviewRepository, ReviewsCommand, ReviewsQuery, UpdateReviewRequest,
};
use recipe_backend::domain::{
    DeleteRoleRule, ErrorCode, NotifyingReviewsCommand, RecipeId, RecipeService,
    ReviewAuthorizer, ReviewId, ReviewList, ReviewNotification, ReviewService, User, UserRole,
};
use recipe_backend::outbound::memory::InMemoryStore;
use recipe_backend::outbound::notifications::ChannelNotificationPublisher;
use recipe_backend::test_support::MutableClock;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;

type Reviews = ReviewService<InMemoryStore, InMemoryStore, InMemoryStore>;
type Commands = NotifyingReviewsCommand<Reviews, ChannelNotificationPublisher>;
type Recipes = RecipeService<InMemoryStore, InMemoryStore>;

/// Services and collaborators shared by every step of a scenario.
#[derive(Clone)]
struct Harness {
    runtime: Arc<Runtime>,
    store: Arc<InMemoryStore>,
    clock: Arc<MutableClock>,
    reviews: Arc<Reviews>,
    commands: Arc<Commands>,
    recipes: Arc<Recipes>,
    events: Arc<Mutex<UnboundedReceiver<ReviewNotification>>>,
}

impl Harness {
    fn new(rule: DeleteRoleRule) -> Self {
        let runtime = Runtime::new().expect("create runtime");
        let store = Arc::new(InMemoryStore::new());
        let start = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        let clock = Arc::new(MutableClock::new(start));
        for user in [
            User::try_from_strings(1, "bjw", "Byeong Jun").expect("user"),
            User::try_from_strings(2, "kp", "Kim Park").expect("user"),
            User::try_from_strings(3, "admin", "Site Admin")
                .expect("user")
                .with_role(UserRole::Admin),
        ] {
            store.insert_user(user).expect("seed user");
        }

        let reviews = Arc::new(
            ReviewService::new(store.clone(), store.clone(), store.clone(), clock.clone())
                .with_authorizer(ReviewAuthorizer::new(rule)),
        );
        let (publisher, events) = ChannelNotificationPublisher::channel();
        let commands = Arc::new(NotifyingReviewsCommand::new(
            reviews.clone(),
            Arc::new(publisher),
        ));
        let recipes = Arc::new(RecipeService::new(
            store.clone(),
            store.clone(),
            clock.clone(),
        ));

        Self {
            runtime: Arc::new(runtime),
            store,
            clock,
            reviews,
            commands,
            recipes,
            events: Arc::new(Mutex::new(events)),
        }
    }

    fn drain_events(&self) -> Vec<ReviewNotification> {
        let mut receiver = self.events.lock().expect("events lock");
        let mut drained = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            drained.push(event);
        }
        drained
    }
}

#[derive(Default, ScenarioState)]
struct ReviewLifecycleWorld {
    harness: Slot<Harness>,
    recipe_id: Slot<RecipeId>,
    review_id: Slot<ReviewId>,
    last_comment: Slot<String>,
    last_error: Slot<ErrorCode>,
    listing: Slot<ReviewList>,
    view_count: Slot<u64>,
}

impl ReviewLifecycleWorld {
    fn harness(&self) -> Harness {
        self.harness.get().expect("community should be set up")
    }

    fn recipe_id(&self) -> RecipeId {
        self.recipe_id.get().expect("recipe should be published")
    }

    fn review_id(&self) -> ReviewId {
        self.review_id.get().expect("review should exist")
    }

    fn setup(&self, rule: DeleteRoleRule) {
        let harness = Harness::new(rule);
        let detail = harness
            .runtime
            .block_on(harness.recipes.create_recipe(CreateRecipeRequest {
                title: "Inari sushi".to_owned(),
                body: "Season the rice, then stuff the pockets.".to_owned(),
                actor: "bjw".to_owned(),
            }))
            .expect("publish recipe");
        self.recipe_id.set(detail.id);
        self.harness.set(harness);
    }

    fn review_as(&self, actor: &str, comment: &str) {
        let harness = self.harness();
        let result = harness
            .runtime
            .block_on(harness.commands.create_review(CreateReviewRequest {
                recipe_id: self.recipe_id(),
                comment: comment.to_owned(),
                actor: actor.to_owned(),
            }));
        match result {
            Ok(response) => {
                self.review_id.set(response.review.id);
                self.last_comment.set(response.review.comment);
            }
            Err(error) => self.last_error.set(error.code()),
        }
    }
}

fn code_name(code: ErrorCode) -> String {
    serde_json::to_value(code)
        .expect("serialise error code")
        .as_str()
        .expect("error codes serialise as strings")
        .to_owned()
}

#[fixture]
fn world() -> ReviewLifecycleWorld {
    ReviewLifecycleWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a community where bjw owns a recipe")]
fn a_community_where_bjw_owns_a_recipe(world: &ReviewLifecycleWorld) {
    world.setup(DeleteRoleRule::Corrected);
}

#[given("a community using the legacy delete rule where bjw owns a recipe")]
fn a_community_using_the_legacy_delete_rule(world: &ReviewLifecycleWorld) {
    world.setup(DeleteRoleRule::Legacy);
}

#[given("kp has reviewed the recipe")]
fn kp_has_reviewed_the_recipe(world: &ReviewLifecycleWorld) {
    world.review_as("kp", "Looks delicious!");
    world.harness().drain_events();
}

#[given("{count} reviews have been left on the recipe")]
fn reviews_have_been_left_on_the_recipe(world: &ReviewLifecycleWorld, count: u32) {
    let harness = world.harness();
    for index in 0..count {
        harness.clock.advance_minutes(1);
        world.review_as("kp", &format!("review {index}"));
    }
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the user {actor} reviews the recipe")]
fn the_user_reviews_the_recipe(world: &ReviewLifecycleWorld, actor: String) {
    world.review_as(&actor, "Looks delicious!");
}

#[when("the user {actor} submits an empty review")]
fn the_user_submits_an_empty_review(world: &ReviewLifecycleWorld, actor: String) {
    world.review_as(&actor, "");
}

#[when("the user {actor} updates the review")]
fn the_user_updates_the_review(world: &ReviewLifecycleWorld, actor: String) {
    let harness = world.harness();
    harness.clock.advance_minutes(5);
    let result = harness
        .runtime
        .block_on(harness.commands.update_review(UpdateReviewRequest {
            recipe_id: world.recipe_id(),
            review_id: world.review_id(),
            comment: "new text".to_owned(),
            actor,
        }));
    match result {
        Ok(record) => world.last_comment.set(record.comment),
        Err(error) => world.last_error.set(error.code()),
    }
}

#[when("the user {actor} deletes the review")]
fn the_user_deletes_the_review(world: &ReviewLifecycleWorld, actor: String) {
    let harness = world.harness();
    let result = harness
        .runtime
        .block_on(harness.commands.delete_review(DeleteReviewRequest {
            recipe_id: world.recipe_id(),
            review_id: world.review_id(),
            actor,
        }));
    if let Err(error) = result {
        world.last_error.set(error.code());
    }
}

#[when("the reviews are listed")]
fn the_reviews_are_listed(world: &ReviewLifecycleWorld) {
    let harness = world.harness();
    let listing = harness
        .runtime
        .block_on(harness.reviews.list_reviews(world.recipe_id()))
        .expect("list reviews");
    world.listing.set(listing);
}

#[when("the recipe is viewed {times} times")]
fn the_recipe_is_viewed(world: &ReviewLifecycleWorld, times: u32) {
    let harness = world.harness();
    for _ in 0..times {
        let detail = harness
            .runtime
            .block_on(harness.recipes.find_recipe(world.recipe_id()))
            .expect("view recipe");
        world.view_count.set(detail.view_count);
    }
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the review is stored")]
fn the_review_is_stored(world: &ReviewLifecycleWorld) {
    let harness = world.harness();
    let stored = harness
        .runtime
        .block_on(harness.store.find_by_id(&world.review_id()))
        .expect("lookup review");
    assert!(stored.is_some(), "review should be persisted");
}

#[then("exactly {count} notification is addressed to {recipient}")]
fn notifications_are_addressed_to(world: &ReviewLifecycleWorld, count: usize, recipient: String) {
    let events = world.harness().drain_events();
    assert_eq!(events.len(), count);
    assert!(
        events
            .iter()
            .all(|event| event.recipient.user_name().as_ref() == recipient)
    );
}

#[then("the request fails with {code}")]
fn the_request_fails_with(world: &ReviewLifecycleWorld, code: String) {
    let actual = world.last_error.get().expect("an error should be recorded");
    assert_eq!(code_name(actual), code);
}

#[then("the review comment reads new text")]
fn the_review_comment_reads_new_text(world: &ReviewLifecycleWorld) {
    assert_eq!(world.last_comment.get().as_deref(), Some("new text"));
    let harness = world.harness();
    let stored = harness
        .runtime
        .block_on(harness.store.find_by_id(&world.review_id()))
        .expect("lookup review")
        .expect("review should still exist");
    assert_eq!(stored.comment.as_ref(), "new text");
    assert!(stored.updated_at > stored.created_at);
}

#[then("the review no longer exists")]
fn the_review_no_longer_exists(world: &ReviewLifecycleWorld) {
    let harness = world.harness();
    let stored = harness
        .runtime
        .block_on(harness.store.find_by_id(&world.review_id()))
        .expect("lookup review");
    assert!(stored.is_none(), "review should be gone");
}

#[then("{count} reviews are returned in creation order")]
fn reviews_are_returned_in_creation_order(world: &ReviewLifecycleWorld, count: usize) {
    let listing = world.listing.get().expect("listing should be recorded");
    assert_eq!(listing.reviews.len(), count);
    assert!(
        listing
            .reviews
            .windows(2)
            .all(|pair| pair[0].created_at < pair[1].created_at)
    );
    assert_eq!(listing.reviews[0].comment, "review 0");
}

#[then("the recipe shows {count} views")]
fn the_recipe_shows_views(world: &ReviewLifecycleWorld, count: u64) {
    assert_eq!(world.view_count.get(), Some(count));
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Cross-user review notifies the recipe owner"
)]
fn cross_user_review_notifies_the_recipe_owner(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Self review stays silent"
)]
fn self_review_stays_silent(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Empty reviews are rejected"
)]
fn empty_reviews_are_rejected(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Only the recipe owner may update a review"
)]
fn only_the_recipe_owner_may_update_a_review(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Moderators may delete any review"
)]
fn moderators_may_delete_any_review(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Legacy rule restricts deletion to the author"
)]
fn legacy_rule_restricts_deletion_to_the_author(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Unknown users cannot review"
)]
fn unknown_users_cannot_review(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Listing returns the first page oldest first"
)]
fn listing_returns_the_first_page_oldest_first(world: ReviewLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/review_lifecycle.feature",
    name = "Viewing a recipe counts every view"
)]
fn viewing_a_recipe_counts_every_view(world: ReviewLifecycleWorld) {
    let _ = world;
}
