mod browse;
mod config_cmd;
mod favourite;
mod list;
mod session_cmd;

pub use browse::BrowseCommand;
pub use config_cmd::ConfigCommand;
pub use favourite::FavouriteCommand;
pub use list::ListCommand;
pub use session_cmd::{LoginCommand, LogoutCommand, StatusCommand};

use clap::ValueEnum;

use recipebook::auth::SessionAuth;
use recipebook::config::Config;
use recipebook::services::{AuthService, HttpRecipeService};
use recipebook::view::RecipeListView;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The recipe list wired to the real services.
pub type RecipeList = RecipeListView<HttpRecipeService, SessionAuth>;

/// Builds the services from `config`, fetches the recipes and mounts the
/// recipe list on them.
pub async fn open_recipe_list(config: &Config) -> Result<RecipeList, Box<dyn std::error::Error>> {
    let auth = SessionAuth::load(&config.session_path.value);
    let service = HttpRecipeService::new(
        config.api_url.value.clone(),
        auth.access_token().map(str::to_string),
        config.request_timeout(),
    )?;

    let recipes = service
        .get_recipes()
        .await
        .map_err(|e| format!("Failed to load recipes from {}: {}", service.base_url(), e))?;
    tracing::debug!("Loaded {} recipe(s)", recipes.len());

    let mut list = RecipeListView::new(recipes, service, auth);
    list.mount().await;
    Ok(list)
}

/// Fails with a hint to log in unless someone is signed in.
pub fn require_sign_in(auth: &impl AuthService) -> Result<(), String> {
    if auth.is_authenticated() {
        Ok(())
    } else {
        Err("Not signed in. Run 'recipebook login' first.".to_string())
    }
}
