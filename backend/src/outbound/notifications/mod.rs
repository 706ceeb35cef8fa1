//! Notification publishers.
//!
//! [`TracingNotificationPublisher`] writes each event as a structured log
//! line. [`ChannelNotificationPublisher`] forwards events over a Tokio
//! unbounded channel to whatever dispatcher owns the receiving end.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::info;

use crate::domain::ReviewNotification;
use crate::domain::ports::{NotificationPublisher, NotificationPublisherError};

/// Publisher that logs events and drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationPublisher;

#[async_trait]
impl NotificationPublisher for TracingNotificationPublisher {
    async fn publish(
        &self,
        notification: &ReviewNotification,
    ) -> Result<(), NotificationPublisherError> {
        info!(
            kind = ?notification.kind,
            actor = %notification.actor.user_name(),
            recipient = %notification.recipient.user_name(),
            recipe_id = %notification.recipe.id,
            "review notification"
        );
        Ok(())
    }
}

/// Publisher backed by an unbounded Tokio channel.
///
/// # Examples
/// ```
/// use recipe_backend::outbound::notifications::ChannelNotificationPublisher;
///
/// let (publisher, mut receiver) = ChannelNotificationPublisher::channel();
/// drop(publisher);
/// assert!(receiver.try_recv().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChannelNotificationPublisher {
    sender: mpsc::UnboundedSender<ReviewNotification>,
}

impl ChannelNotificationPublisher {
    /// Wrap an existing sender.
    pub fn new(sender: mpsc::UnboundedSender<ReviewNotification>) -> Self {
        Self { sender }
    }

    /// Create a publisher together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ReviewNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl NotificationPublisher for ChannelNotificationPublisher {
    async fn publish(
        &self,
        notification: &ReviewNotification,
    ) -> Result<(), NotificationPublisherError> {
        self.sender
            .send(notification.clone())
            .map_err(|_| NotificationPublisherError::unavailable("receiver dropped"))
    }
}
