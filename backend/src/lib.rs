//! Recipe community backend: review lifecycle and recipe services.
//!
//! The [`domain`] module holds entities, permission rules, and the services
//! implementing the driving ports. [`outbound`] provides adapters for the
//! driven ports, and [`settings`] loads runtime configuration.

pub mod domain;
pub mod outbound;
pub mod settings;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
