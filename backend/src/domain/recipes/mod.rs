//! Recipe publishing, editing, and browsing.

mod projection;
pub mod service;

pub use projection::{RecipeDetail, RecipeSummary};
pub use service::RecipeService;
