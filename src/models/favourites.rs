use std::collections::HashSet;

use super::recipe::{Recipe, RecipeId};

/// The set of recipe ids a user has starred.
///
/// The recipe API answers favourite queries with full recipes; only the ids
/// matter for deciding what is starred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favourites {
    ids: HashSet<RecipeId>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeId> {
        self.ids.iter()
    }
}

impl FromIterator<RecipeId> for Favourites {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
