use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a recipe as issued by the recipe API (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: RecipeId,
    pub name: String,
    #[serde(rename = "cookingTime", default)]
    pub cooking_time: String,
    #[serde(rename = "mainIngredients", default)]
    pub main_ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cooking_time: String::new(),
            main_ingredients: Vec::new(),
        }
    }

    pub fn with_cooking_time(mut self, cooking_time: impl Into<String>) -> Self {
        self.cooking_time = cooking_time.into();
        self
    }

    pub fn with_main_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.main_ingredients = ingredients;
        self
    }

    /// Path of the recipe's detail page.
    pub fn link(&self) -> String {
        format!("/recipe/{}", self.id)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Cooking Time: {}", self.cooking_time)?;
        write!(f, "Main Ingredients: {}", self.main_ingredients.join(", "))
    }
}
