use clap::Args;

use recipebook::config::Config;

use super::{open_recipe_list, require_sign_in, OutputFormat};

/// List recipes
#[derive(Args)]
pub struct ListCommand {
    /// Only show recipes matching this term (name, ingredient or cooking time)
    #[arg(long, short)]
    search: Option<String>,

    /// Only show starred recipes (requires sign-in)
    #[arg(long)]
    starred: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ListCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut list = open_recipe_list(config).await?;
        if self.starred {
            require_sign_in(list.auth())?;
        }

        if let Some(term) = &self.search {
            list.set_search_term(term.as_str());
            list.search();
        }
        if self.starred {
            list.toggle_favourites_view();
        }

        let rendered = list.render();
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
            OutputFormat::Text => print!("{}", rendered),
        }
        Ok(())
    }
}
