//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local entity store backing users, recipes, and
//!   reviews.
//! - **notifications**: publishers that hand review events to a log sink or a
//!   Tokio channel.
//!
//! Adapters are thin translators. They contain no business logic.

pub mod memory;
pub mod notifications;
