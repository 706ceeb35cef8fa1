//! Review lifecycle: creation, comment replacement, removal, and listing.
//!
//! A review moves `absent -> active -> (updated)* -> removed`. There are no
//! drafts and no tombstones. [`ReviewService`] implements both driving ports;
//! [`NotifyingReviewsCommand`] dispatches the cross-user event that creation
//! may produce.

mod notifying;
mod projection;
pub mod service;

pub use notifying::NotifyingReviewsCommand;
pub use projection::{ReviewList, ReviewListing, ReviewRecord};
pub use service::{REVIEW_DELETED_MESSAGE, REVIEW_PAGE_SIZE, ReviewService};
