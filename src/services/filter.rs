use crate::models::Recipe;

/// Keeps the recipes whose name, any main ingredient, or cooking time
/// contains `term`, ignoring case. Order is preserved and a blank term keeps
/// everything.
pub fn filter_recipes(recipes: &[Recipe], term: &str) -> Vec<Recipe> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.to_vec();
    }

    recipes
        .iter()
        .filter(|recipe| matches_term(recipe, &needle))
        .cloned()
        .collect()
}

fn matches_term(recipe: &Recipe, needle: &str) -> bool {
    recipe.name.to_lowercase().contains(needle)
        || recipe.cooking_time.to_lowercase().contains(needle)
        || recipe
            .main_ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

/// Returns true when both lists contain equal recipes in the same order.
pub fn compare_recipe_lists(a: &[Recipe], b: &[Recipe]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
