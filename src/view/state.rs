use serde::Serialize;

use crate::models::{Favourites, Recipe};

/// Whether the list is narrowed down to search matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Unfiltered,
    /// `matches` is what the recipe service returned for `term` when the
    /// search ran. Showing everything again means dropping back to
    /// `Unfiltered`.
    Filtered { term: String, matches: Vec<Recipe> },
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Filtered { .. })
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            SearchState::Unfiltered => None,
            SearchState::Filtered { term, .. } => Some(term),
        }
    }
}

/// Local state of the recipe list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Text typed into the filter box, not applied until a search runs.
    pub search_input: Option<String>,
    pub search: SearchState,
    pub show_only_favourites: bool,
    /// `None` until the favourites have been fetched at least once.
    pub favourites: Option<Favourites>,
    pub error: Option<String>,
}

impl ViewState {
    pub fn search_active(&self) -> bool {
        self.search.is_active()
    }

    /// The favourites toggle button is pressed exactly when the favourites
    /// view is on.
    pub fn favourites_toggle_active(&self) -> bool {
        self.show_only_favourites
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_favourite(&self, recipe: &Recipe) -> bool {
        self.favourites
            .as_ref()
            .is_some_and(|favourites| favourites.contains(&recipe.id))
    }
}

/// A recipe as displayed, annotated with its favourite status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeEntry<'a> {
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    #[serde(rename = "isFavourite")]
    pub is_favourite: bool,
}

/// Computes the displayed list from the parent's `recipes` and `state`.
///
/// The working list is the search matches while a search is active and
/// `recipes` otherwise. Every entry is annotated with favourite membership;
/// with the favourites view on, non-favourites are dropped. Order is kept.
pub fn derive_view<'a>(state: &'a ViewState, recipes: &'a [Recipe]) -> Vec<RecipeEntry<'a>> {
    let working = match &state.search {
        SearchState::Unfiltered => recipes,
        SearchState::Filtered { matches, .. } => matches.as_slice(),
    };

    working
        .iter()
        .map(|recipe| RecipeEntry {
            recipe,
            is_favourite: state.is_favourite(recipe),
        })
        .filter(|entry| !state.show_only_favourites || entry.is_favourite)
        .collect()
}
