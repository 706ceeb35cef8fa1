//! Dispatch of review notifications.
//!
//! The lifecycle service only returns the event it would like sent. This
//! decorator hands that event to a [`NotificationPublisher`] exactly once and
//! swallows publisher failures after logging them, leaving the review write
//! untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::ReviewRecord;
use crate::domain::Error;
use crate::domain::ports::{
    CreateReviewRequest, CreateReviewResponse, DeleteReviewRequest, DeleteReviewResponse,
    NotificationPublisher, ReviewsCommand, UpdateReviewRequest,
};

/// [`ReviewsCommand`] decorator that publishes creation events.
#[derive(Clone)]
pub struct NotifyingReviewsCommand<C, P> {
    inner: Arc<C>,
    publisher: Arc<P>,
}

impl<C, P> NotifyingReviewsCommand<C, P> {
    /// Wrap `inner`, sending its events through `publisher`.
    pub fn new(inner: Arc<C>, publisher: Arc<P>) -> Self {
        Self { inner, publisher }
    }
}

#[async_trait]
impl<C, P> ReviewsCommand for NotifyingReviewsCommand<C, P>
where
    C: ReviewsCommand,
    P: NotificationPublisher,
{
    async fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> Result<CreateReviewResponse, Error> {
        let response = self.inner.create_review(request).await?;
        if let Some(notification) = response.notification.as_ref()
            && let Err(error) = self.publisher.publish(notification).await
        {
            warn!(
                recipe_id = %notification.recipe.id,
                recipient = %notification.recipient.user_name(),
                %error,
                "failed to publish review notification"
            );
        }
        Ok(response)
    }

    async fn update_review(&self, request: UpdateReviewRequest) -> Result<ReviewRecord, Error> {
        self.inner.update_review(request).await
    }

    async fn delete_review(
        &self,
        request: DeleteReviewRequest,
    ) -> Result<DeleteReviewResponse, Error> {
        self.inner.delete_review(request).await
    }
}

#[cfg(test)]
mod tests {
    //! Dispatch behaviour against mocked collaborators.
    use super::*;
    use crate::domain::ports::{
        MockNotificationPublisher, MockReviewsCommand, NotificationPublisherError,
    };
    use crate::domain::{
        Recipe, RecipeContent, RecipeId, ReviewId, ReviewNotification, User,
    };
    use rstest::rstest;

    fn response(with_event: bool) -> CreateReviewResponse {
        let owner = User::try_from_strings(15, "bjw", "Byeong Jun").expect("user");
        let actor = User::try_from_strings(2, "kp", "Kim Park").expect("user");
        let content = RecipeContent::new("Inari sushi", "Like this").expect("content");
        let recipe = Recipe::builder(RecipeId::new(1), owner, content).build();
        CreateReviewResponse {
            review: ReviewRecord {
                id: ReviewId::new(8),
                author_name: "Kim Park".to_owned(),
                comment: "Tasty".to_owned(),
            },
            notification: with_event
                .then(|| ReviewNotification::new_review(&actor, &recipe))
                .flatten(),
        }
    }

    fn request() -> CreateReviewRequest {
        CreateReviewRequest {
            recipe_id: RecipeId::new(1),
            comment: "Tasty".to_owned(),
            actor: "kp".to_owned(),
        }
    }

    fn command_returning(with_event: bool) -> MockReviewsCommand {
        let mut inner = MockReviewsCommand::new();
        inner
            .expect_create_review()
            .times(1)
            .return_once(move |_| Ok(response(with_event)));
        inner
    }

    #[rstest]
    #[case(true, 1)]
    #[case(false, 0)]
    #[tokio::test]
    async fn publishes_only_when_an_event_exists(#[case] with_event: bool, #[case] calls: usize) {
        let mut publisher = MockNotificationPublisher::new();
        publisher
            .expect_publish()
            .times(calls)
            .withf(|event| event.recipient.user_name().as_ref() == "bjw")
            .returning(|_| Ok(()));
        let command = NotifyingReviewsCommand::new(
            Arc::new(command_returning(with_event)),
            Arc::new(publisher),
        );

        let response = command.create_review(request()).await.expect("create");

        assert_eq!(response.notification.is_some(), with_event);
    }

    #[tokio::test]
    async fn publisher_failure_does_not_fail_creation() {
        let mut publisher = MockNotificationPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .return_once(|_| Err(NotificationPublisherError::unavailable("queue full")));
        let command =
            NotifyingReviewsCommand::new(Arc::new(command_returning(true)), Arc::new(publisher));

        let response = command.create_review(request()).await.expect("create");

        assert_eq!(response.review.id, ReviewId::new(8));
    }

    #[tokio::test]
    async fn inner_failure_skips_publishing() {
        let mut inner = MockReviewsCommand::new();
        inner
            .expect_create_review()
            .times(1)
            .return_once(|_| Err(Error::empty_content("comment")));
        let mut publisher = MockNotificationPublisher::new();
        publisher.expect_publish().never();
        let command = NotifyingReviewsCommand::new(Arc::new(inner), Arc::new(publisher));

        let error = command
            .create_review(request())
            .await
            .expect_err("inner failure");

        assert_eq!(error.code(), crate::domain::ErrorCode::EmptyContent);
    }

    #[tokio::test]
    async fn delete_passes_straight_through() {
        let mut inner = MockReviewsCommand::new();
        inner.expect_delete_review().times(1).return_once(|request| {
            Ok(DeleteReviewResponse {
                review_id: request.review_id,
                message: "review deleted".to_owned(),
            })
        });
        let command = NotifyingReviewsCommand::new(
            Arc::new(inner),
            Arc::new(MockNotificationPublisher::new()),
        );

        let response = command
            .delete_review(DeleteReviewRequest {
                recipe_id: RecipeId::new(1),
                review_id: ReviewId::new(5),
                actor: "kp".to_owned(),
            })
            .await
            .expect("delete");

        assert_eq!(response.review_id, ReviewId::new(5));
    }
}
