//! Interactive recipe browser.
//!
//! Reads one action per line from stdin and re-renders the list after each
//! one. A line that isn't a known action is taken as a filter term and
//! searched for, like pressing Enter in the filter box.

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipebook::config::Config;
use recipebook::models::RecipeId;

use super::{open_recipe_list, RecipeList};

const HELP: &str = "\
Actions:
  <text>             filter by <text> and search
  filter <text>      set the filter text without searching
  search [<text>]    search (or show all again when a search is active)
  starred            toggle between starred recipes and all recipes
  star <n|id>        star the recipe at position n, or by id
  unstar <n|id>      unstar the recipe at position n, or by id
  refresh            reload recipes and favourites
  help               show this help
  quit               leave";

/// Browse recipes interactively
#[derive(Args)]
pub struct BrowseCommand;

/// A recipe referred to by list position or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRef {
    Position(usize),
    Id(RecipeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Filter(String),
    Search(Option<String>),
    ToggleStarred,
    Star(RecipeRef),
    Unstar(RecipeRef),
    Refresh,
    Help,
    Quit,
    Nothing,
}

impl BrowseAction {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(BrowseAction::Nothing);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let action = match word.to_lowercase().as_str() {
            "filter" => BrowseAction::Filter(rest.to_string()),
            "search" if rest.is_empty() => BrowseAction::Search(None),
            "search" => BrowseAction::Search(Some(rest.to_string())),
            "starred" if rest.is_empty() => BrowseAction::ToggleStarred,
            "star" => BrowseAction::Star(parse_recipe_ref(rest)?),
            "unstar" => BrowseAction::Unstar(parse_recipe_ref(rest)?),
            "refresh" if rest.is_empty() => BrowseAction::Refresh,
            "help" | "?" if rest.is_empty() => BrowseAction::Help,
            "quit" | "exit" | "q" if rest.is_empty() => BrowseAction::Quit,
            _ => BrowseAction::Search(Some(line.to_string())),
        };
        Ok(action)
    }
}

fn parse_recipe_ref(text: &str) -> Result<RecipeRef, String> {
    if text.is_empty() {
        return Err("Which recipe? Give its position or id.".to_string());
    }
    match text.parse::<usize>() {
        Ok(position) => Ok(RecipeRef::Position(position)),
        Err(_) => Ok(RecipeRef::Id(RecipeId::new(text))),
    }
}

impl BrowseCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut list = open_recipe_list(config).await?;
        print!("{}", list.render());
        println!("Type 'help' for actions.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let action = match BrowseAction::parse(&line) {
                Ok(action) => action,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };
            tracing::debug!("Browse action: {:?}", action);

            match action {
                BrowseAction::Quit => break,
                BrowseAction::Nothing => continue,
                BrowseAction::Help => {
                    println!("{}", HELP);
                    continue;
                }
                action => {
                    if let Err(message) = apply(&mut list, action).await {
                        println!("{}", message);
                        continue;
                    }
                }
            }

            println!();
            print!("{}", list.render());
        }

        Ok(())
    }
}

async fn apply(list: &mut RecipeList, action: BrowseAction) -> Result<(), String> {
    match action {
        BrowseAction::Filter(text) => list.set_search_term(text),
        BrowseAction::Search(text) => {
            if let Some(text) = text {
                list.set_search_term(text);
            }
            list.search();
        }
        BrowseAction::ToggleStarred => list.toggle_favourites_view(),
        BrowseAction::Star(recipe) => {
            let id = resolve(list, recipe)?;
            list.add_favourite(&id).await;
        }
        BrowseAction::Unstar(recipe) => {
            let id = resolve(list, recipe)?;
            list.remove_favourite(&id).await;
        }
        BrowseAction::Refresh => {
            let recipes = list
                .recipe_service()
                .get_recipes()
                .await
                .map_err(|e| format!("Failed to reload recipes: {}", e))?;
            list.on_recipes_changed(recipes);
            list.load_favourites().await;
        }
        BrowseAction::Help | BrowseAction::Quit | BrowseAction::Nothing => {}
    }
    Ok(())
}

fn resolve(list: &RecipeList, recipe: RecipeRef) -> Result<RecipeId, String> {
    match recipe {
        RecipeRef::Position(position) => list
            .entry_at(position)
            .ok_or_else(|| format!("No recipe at position {}", position)),
        RecipeRef::Id(id) => Ok(id),
    }
}
