//! Permission decisions for review mutations.
//!
//! The authorizer is pure: callers resolve users, recipes, and reviews first
//! and hand the relevant owners in. It never touches a store.

use serde::{Deserialize, Serialize};

use super::User;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The action may proceed.
    Allow,
    /// The action is refused with `InvalidPermission`.
    Deny,
}

impl Decision {
    /// Whether the action may proceed.
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }
}

/// How moderator roles participate in review deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteRoleRule {
    /// The author, an `ADMIN`, or a `HEAD` may delete.
    #[default]
    Corrected,
    /// Only the author may delete, whatever their role. This is what a
    /// `!author && (role != ADMIN || role != HEAD)` guard evaluates
    /// to, since its role clause always holds.
    Legacy,
}

/// Decides whether an actor may create, update, or delete a review.
///
/// # Examples
/// ```
/// use recipe_backend::domain::{DeleteRoleRule, ReviewAuthorizer, User, UserRole};
///
/// let author = User::try_from_strings(2, "kp", "Kim Park").expect("user");
/// let admin = User::try_from_strings(3, "admin", "Admin")
///     .expect("user")
///     .with_role(UserRole::Admin);
///
/// let corrected = ReviewAuthorizer::new(DeleteRoleRule::Corrected);
/// assert!(corrected.can_delete(&admin, &author).is_allowed());
///
/// let legacy = ReviewAuthorizer::new(DeleteRoleRule::Legacy);
/// assert!(!legacy.can_delete(&admin, &author).is_allowed());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewAuthorizer {
    delete_rule: DeleteRoleRule,
}

impl ReviewAuthorizer {
    /// Build an authorizer with the given delete rule.
    pub const fn new(delete_rule: DeleteRoleRule) -> Self {
        Self { delete_rule }
    }

    /// The delete rule in force.
    pub const fn delete_rule(&self) -> DeleteRoleRule {
        self.delete_rule
    }

    /// Any resolved actor may review any resolved recipe.
    pub const fn can_create(&self, _actor: &User) -> Decision {
        Decision::Allow
    }

    /// Updates are authorised against the recipe's owner, not the review's
    /// author.
    pub fn can_update(&self, actor: &User, recipe_owner: &User) -> Decision {
        Decision::from_bool(actor.is_same_identity(recipe_owner))
    }

    /// Deletes are authorised against the review's author, with a moderator
    /// bypass depending on the configured rule.
    pub fn can_delete(&self, actor: &User, review_author: &User) -> Decision {
        let is_author = actor.is_same_identity(review_author);
        let allowed = match self.delete_rule {
            DeleteRoleRule::Corrected => is_author || actor.role().is_moderator(),
            DeleteRoleRule::Legacy => is_author,
        };
        Decision::from_bool(allowed)
    }
}

#[cfg(test)]
mod tests {
    //! Decision tables for each operation.
    use super::*;
    use crate::domain::UserRole;
    use rstest::{fixture, rstest};

    fn user(name: &str, role: UserRole) -> User {
        User::try_from_strings(1, name, name)
            .expect("valid user")
            .with_role(role)
    }

    #[fixture]
    fn bjw() -> User {
        user("bjw", UserRole::Regular)
    }

    #[rstest]
    #[case(UserRole::Regular)]
    #[case(UserRole::Admin)]
    #[case(UserRole::Head)]
    fn create_is_always_allowed(#[case] role: UserRole) {
        let authorizer = ReviewAuthorizer::default();
        assert_eq!(authorizer.can_create(&user("kp", role)), Decision::Allow);
    }

    #[rstest]
    #[case("bjw", UserRole::Regular, Decision::Allow)]
    #[case("kp", UserRole::Regular, Decision::Deny)]
    #[case("admin", UserRole::Admin, Decision::Deny)]
    #[case("head", UserRole::Head, Decision::Deny)]
    fn update_requires_recipe_owner(
        bjw: User,
        #[case] actor: &str,
        #[case] role: UserRole,
        #[case] expected: Decision,
    ) {
        let authorizer = ReviewAuthorizer::default();
        assert_eq!(authorizer.can_update(&user(actor, role), &bjw), expected);
    }

    #[rstest]
    #[case(DeleteRoleRule::Corrected, "bjw", UserRole::Regular, Decision::Allow)]
    #[case(DeleteRoleRule::Corrected, "kp", UserRole::Regular, Decision::Deny)]
    #[case(DeleteRoleRule::Corrected, "admin", UserRole::Admin, Decision::Allow)]
    #[case(DeleteRoleRule::Corrected, "head", UserRole::Head, Decision::Allow)]
    #[case(DeleteRoleRule::Legacy, "bjw", UserRole::Regular, Decision::Allow)]
    #[case(DeleteRoleRule::Legacy, "kp", UserRole::Regular, Decision::Deny)]
    #[case(DeleteRoleRule::Legacy, "admin", UserRole::Admin, Decision::Deny)]
    #[case(DeleteRoleRule::Legacy, "head", UserRole::Head, Decision::Deny)]
    fn delete_decisions(
        bjw: User,
        #[case] rule: DeleteRoleRule,
        #[case] actor: &str,
        #[case] role: UserRole,
        #[case] expected: Decision,
    ) {
        let authorizer = ReviewAuthorizer::new(rule);
        assert_eq!(authorizer.can_delete(&user(actor, role), &bjw), expected);
    }

    #[rstest]
    fn moderator_author_may_delete_own_review_under_either_rule() {
        let head = user("head", UserRole::Head);
        for rule in [DeleteRoleRule::Corrected, DeleteRoleRule::Legacy] {
            let authorizer = ReviewAuthorizer::new(rule);
            assert!(authorizer.can_delete(&head, &head).is_allowed());
        }
    }
}
