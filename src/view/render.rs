use serde::Serialize;
use std::fmt;

use crate::models::RecipeId;

pub const SIGN_IN_PROMPT: &str =
    "To save your favourite recipes for quicker access, please sign up or log in!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarAction {
    Star,
    Unstar,
}

impl StarAction {
    pub fn label(&self) -> &'static str {
        match self {
            StarAction::Star => "Star Recipe",
            StarAction::Unstar => "Unstar Recipe",
        }
    }
}

/// Why the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyNotice {
    NoStarredRecipes,
    NoMatches,
    NoRecipes,
}

impl EmptyNotice {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyNotice::NoStarredRecipes => {
                "Sorry, you don't currently have any starred recipes, get started by starring recipes you like"
            }
            EmptyNotice::NoMatches => "Sorry, nothing matched your filter term",
            EmptyNotice::NoRecipes => "Sorry, we currently have no recipes for you",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEntry {
    /// 1-based position in the displayed list.
    pub position: usize,
    pub id: RecipeId,
    pub name: String,
    pub link: String,
    pub cooking_time: String,
    pub ingredients: String,
    pub is_favourite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<StarAction>,
}

/// Everything the recipe list shows for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_in_prompt: Option<&'static str>,
    /// Label of the favourites toggle, absent for signed-out users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourites_toggle: Option<&'static str>,
    pub search_button: &'static str,
    pub entries: Vec<RenderedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_notice: Option<EmptyNotice>,
}

impl fmt::Display for RenderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "[error] {}", error)?;
        }
        if let Some(prompt) = self.sign_in_prompt {
            writeln!(f, "[info] {}", prompt)?;
        }

        match self.favourites_toggle {
            Some(toggle) => writeln!(f, "[{}] [{}]", toggle, self.search_button)?,
            None => writeln!(f, "[{}]", self.search_button)?,
        }
        writeln!(f)?;

        if let Some(notice) = self.empty_notice {
            return writeln!(f, "[warning] {}", notice.message());
        }

        for entry in &self.entries {
            let star = if entry.is_favourite { "*" } else { " " };
            writeln!(
                f,
                "{:>3}.{} {}  ({})",
                entry.position, star, entry.name, entry.link
            )?;
            match entry.action {
                Some(action) => writeln!(
                    f,
                    "      Cooking Time: {}  [{}]",
                    entry.cooking_time,
                    action.label()
                )?,
                None => writeln!(f, "      Cooking Time: {}", entry.cooking_time)?,
            }
            writeln!(f, "      Main Ingredients: {}", entry.ingredients)?;
        }

        Ok(())
    }
}
