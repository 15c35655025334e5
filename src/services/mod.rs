//! Services consumed by the recipe list.
//!
//! The list view only talks to these traits. [`HttpRecipeService`] is the
//! production recipe backend and [`crate::auth::SessionAuth`] the production
//! auth backend; tests substitute their own.

mod filter;
mod http;

use std::future::Future;

use thiserror::Error;

use crate::models::{Recipe, RecipeId, UserProfile};

pub use filter::{compare_recipe_lists, filter_recipes};
pub use http::HttpRecipeService;

/// Errors reported by a recipe backend.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Server returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ServiceError::Decode(e.to_string())
        } else {
            ServiceError::Http(e.to_string())
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Recipe listing and per-user favourites.
pub trait RecipeService {
    /// Recipes whose name, main ingredients or cooking time match `term`.
    fn filter_recipes(&self, recipes: &[Recipe], term: &str) -> Vec<Recipe> {
        filter_recipes(recipes, term)
    }

    /// True when both lists hold the same recipes in the same order.
    fn compare_recipe_lists(&self, a: &[Recipe], b: &[Recipe]) -> bool {
        compare_recipe_lists(a, b)
    }

    /// Recipes starred by `user_id`. With `force_refresh` unset an
    /// implementation may answer from an earlier response.
    fn get_user_favourites(
        &self,
        user_id: &str,
        force_refresh: bool,
    ) -> impl Future<Output = ServiceResult<Vec<Recipe>>> + Send;

    /// Stars a recipe and returns the user's updated favourites.
    fn add_favourite_recipe_to_user(
        &self,
        user_id: &str,
        recipe_id: &RecipeId,
    ) -> impl Future<Output = ServiceResult<Vec<Recipe>>> + Send;

    /// Unstars a recipe and returns the user's updated favourites.
    fn remove_favourite_recipe_from_user(
        &self,
        user_id: &str,
        recipe_id: &RecipeId,
    ) -> impl Future<Output = ServiceResult<Vec<Recipe>>> + Send;
}

/// Who, if anyone, is signed in.
pub trait AuthService {
    fn is_authenticated(&self) -> bool;

    fn user_profile(&self) -> Option<UserProfile>;
}
