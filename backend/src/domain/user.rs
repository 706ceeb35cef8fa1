//! User identity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The login name is empty.
    #[error("user name must not be empty")]
    EmptyUserName,
    /// The login name exceeds [`USER_NAME_MAX`] characters.
    #[error("user name must be at most {max} characters")]
    UserNameTooLong {
        /// Permitted maximum.
        max: usize,
    },
    /// The display name is blank.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// The display name exceeds [`DISPLAY_NAME_MAX`] characters.
    #[error("display name must be at most {max} characters")]
    DisplayNameTooLong {
        /// Permitted maximum.
        max: usize,
    },
}

/// Numeric user identifier assigned by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw store identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum allowed length for a login name.
pub const USER_NAME_MAX: usize = 32;
/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Unique login name. Caller identity is always expressed as a user name.
///
/// Any non-empty text up to [`USER_NAME_MAX`] characters is accepted, which
/// covers e-mail style and non-Latin names alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(user_name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(user_name.into())
    }

    fn from_owned(user_name: String) -> Result<Self, UserValidationError> {
        if user_name.is_empty() {
            return Err(UserValidationError::EmptyUserName);
        }
        if user_name.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::UserNameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(user_name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable name shown next to a user's reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(display_name.into())
    }

    fn from_owned(display_name: String) -> Result<Self, UserValidationError> {
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        if display_name.chars().count() > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Role granted to a user. Roles may change outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Ordinary community member.
    #[default]
    Regular,
    /// Site administrator.
    Admin,
    /// Head moderator.
    Head,
}

impl UserRole {
    /// Whether the role may moderate content it does not own.
    pub const fn is_moderator(self) -> bool {
        matches!(self, Self::Admin | Self::Head)
    }
}

/// Application user.
///
/// ## Invariants
/// - `user_name` is unique across the store; two users with the same
///   user name are the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    user_name: UserName,
    display_name: DisplayName,
    role: UserRole,
}

impl User {
    /// Build a regular user from validated components.
    pub fn new(id: UserId, user_name: UserName, display_name: DisplayName) -> Self {
        Self {
            id,
            user_name,
            display_name,
            role: UserRole::Regular,
        }
    }

    /// Fallible constructor from raw strings.
    ///
    /// # Examples
    /// ```
    /// use recipe_backend::domain::{User, UserRole};
    ///
    /// let user = User::try_from_strings(15, "bjw", "Byeong Jun")
    ///     .expect("valid user")
    ///     .with_role(UserRole::Admin);
    /// assert_eq!(user.user_name().as_ref(), "bjw");
    /// assert!(user.role().is_moderator());
    /// ```
    pub fn try_from_strings(
        id: i64,
        user_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id),
            UserName::new(user_name)?,
            DisplayName::new(display_name)?,
        ))
    }

    /// Replace the user's role.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Store identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique login name.
    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// Name shown to other users.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Current role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Whether both values denote the same identity.
    pub fn is_same_identity(&self, other: &User) -> bool {
        self.user_name == other.user_name
    }
}
