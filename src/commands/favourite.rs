use clap::Args;

use recipebook::config::Config;
use recipebook::models::RecipeId;

use super::{open_recipe_list, require_sign_in};

/// Star or unstar a recipe
#[derive(Args)]
pub struct FavouriteCommand {
    /// Recipe ID
    id: String,
}

impl FavouriteCommand {
    pub async fn star(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        self.run(config, true).await
    }

    pub async fn unstar(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        self.run(config, false).await
    }

    async fn run(&self, config: &Config, star: bool) -> Result<(), Box<dyn std::error::Error>> {
        let mut list = open_recipe_list(config).await?;
        require_sign_in(list.auth())?;

        let id = RecipeId::new(self.id.as_str());
        if star {
            list.add_favourite(&id).await;
        } else {
            list.remove_favourite(&id).await;
        }

        if let Some(error) = &list.state().error {
            return Err(error.clone().into());
        }

        let name = list
            .recipes()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.as_str())
            .unwrap_or(self.id.as_str());
        let count = list
            .state()
            .favourites
            .as_ref()
            .map(|f| f.len())
            .unwrap_or(0);

        if star {
            println!("Starred '{}' ({} starred recipe(s))", name, count);
        } else {
            println!("Unstarred '{}' ({} starred recipe(s))", name, count);
        }
        Ok(())
    }
}
