//! Recipebook
//!
//! Browse recipes, filter them, and star the ones you like. The recipe list
//! in [`view`] holds the UI logic; [`services`] and [`auth`] provide the
//! recipe API and the signed-in session it runs against.

pub mod auth;
pub mod config;
pub mod models;
pub mod services;
pub mod view;

pub use auth::{Session, SessionAuth};
pub use models::{Favourites, Recipe, RecipeId, UserProfile};
pub use services::{AuthService, HttpRecipeService, RecipeService, ServiceError};
pub use view::{derive_view, RecipeListView, RenderedList, SearchState, ViewState};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
