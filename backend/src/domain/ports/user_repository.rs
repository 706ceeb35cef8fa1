//! Port for resolving caller identities to users.

use async_trait::async_trait;

use crate::domain::{User, UserName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Read access to registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look a user up by their unique login name.
    ///
    /// Absence is reported as `Ok(None)`, never as an error.
    async fn find_by_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation that knows no users.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_user_name(
        &self,
        _user_name: &UserName,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}
