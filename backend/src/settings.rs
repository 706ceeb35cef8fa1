//! Review service configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use pagination::DEFAULT_PAGE_SIZE;
use serde::Deserialize;

use crate::domain::{DeleteRoleRule, ReviewAuthorizer};

/// Configuration values for the review and recipe services.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPE_REVIEWS")]
pub struct ReviewSettings {
    /// Restrict review deletion to the author, ignoring moderator roles.
    pub legacy_delete_rule: Option<bool>,
    /// Optional override for the recipe listing page size.
    pub recipe_page_size: Option<u32>,
    /// Seed demonstration users and a recipe on startup.
    pub seed_demo_data: Option<bool>,
}

impl ReviewSettings {
    /// Delete rule selected by `legacy_delete_rule`.
    pub fn delete_rule(&self) -> DeleteRoleRule {
        if self.legacy_delete_rule.unwrap_or(false) {
            DeleteRoleRule::Legacy
        } else {
            DeleteRoleRule::Corrected
        }
    }

    /// Authorizer configured with [`Self::delete_rule`].
    pub fn authorizer(&self) -> ReviewAuthorizer {
        ReviewAuthorizer::new(self.delete_rule())
    }

    /// Return the configured recipe page size, falling back to the default.
    pub fn recipe_page_size(&self) -> u32 {
        self.recipe_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Whether the demo walkthrough should run; on unless disabled.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for review configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ReviewSettings {
        ReviewSettings::load_from_iter([OsString::from("recipe-reviews")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("RECIPE_REVIEWS_LEGACY_DELETE_RULE", None::<String>),
            ("RECIPE_REVIEWS_RECIPE_PAGE_SIZE", None::<String>),
            ("RECIPE_REVIEWS_SEED_DEMO_DATA", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.legacy_delete_rule, None);
        assert_eq!(settings.delete_rule(), DeleteRoleRule::Corrected);
        assert_eq!(settings.recipe_page_size(), DEFAULT_PAGE_SIZE);
        assert!(settings.seed_demo_data());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("RECIPE_REVIEWS_LEGACY_DELETE_RULE", Some("true".to_owned())),
            ("RECIPE_REVIEWS_RECIPE_PAGE_SIZE", Some("5".to_owned())),
            ("RECIPE_REVIEWS_SEED_DEMO_DATA", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.delete_rule(), DeleteRoleRule::Legacy);
        assert_eq!(settings.authorizer().delete_rule(), DeleteRoleRule::Legacy);
        assert_eq!(settings.recipe_page_size(), 5);
        assert!(!settings.seed_demo_data());
    }

    #[rstest]
    fn legacy_rule_is_selected_by_environment_alone() {
        let _guard = lock_env([
            ("RECIPE_REVIEWS_LEGACY_DELETE_RULE", Some("true".to_owned())),
            ("RECIPE_REVIEWS_RECIPE_PAGE_SIZE", None::<String>),
            ("RECIPE_REVIEWS_SEED_DEMO_DATA", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.delete_rule(), DeleteRoleRule::Legacy);
        assert!(settings.seed_demo_data());
    }
}
