//! Port for handing notification events to a delivery channel.

use async_trait::async_trait;

use crate::domain::ReviewNotification;

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification publishers.
    pub enum NotificationPublisherError {
        /// The delivery channel is not accepting events.
        Unavailable { message: String } => "notification channel unavailable: {message}",
    }
}

/// One-way sink for notification events.
///
/// Delivery order and retries belong to the adapter. Callers treat a
/// successful return as "handed off", nothing more.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Hand one event to the delivery channel.
    async fn publish(
        &self,
        notification: &ReviewNotification,
    ) -> Result<(), NotificationPublisherError>;
}
