//! The recipe list: a filterable, favouritable list of recipes.
//!
//! [`RecipeListView`] holds the parent's recipes plus local UI state and
//! turns events into state changes:
//!
//! - mount: fetch the signed-in user's favourites
//! - typing: [`RecipeListView::set_search_term`]
//! - search button / Enter: [`RecipeListView::search`], which toggles between
//!   the matches and the full list
//! - favourites toggle: [`RecipeListView::toggle_favourites_view`]
//! - star / unstar: [`RecipeListView::add_favourite`] and
//!   [`RecipeListView::remove_favourite`]
//! - new recipes from the parent: [`RecipeListView::on_recipes_changed`]
//!
//! What is displayed is never stored. Each render derives it from the
//! recipes and the state with [`derive_view`], so the parent's list is
//! never modified.
//!
//! Service failures never escape: they become the error banner and the
//! list stays usable. Nothing is retried.

mod render;
mod state;

pub use render::{EmptyNotice, RenderedEntry, RenderedList, StarAction, SIGN_IN_PROMPT};
pub use state::{derive_view, RecipeEntry, SearchState, ViewState};

use crate::models::{Favourites, Recipe, RecipeId};
use crate::services::{AuthService, RecipeService, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FavouriteChange {
    Add,
    Remove,
}

impl FavouriteChange {
    fn error_prefix(&self) -> &'static str {
        match self {
            FavouriteChange::Add => "An error occurred when adding favourite",
            FavouriteChange::Remove => "An error occurred when removing favourite",
        }
    }
}

pub struct RecipeListView<R, A> {
    recipes: Vec<Recipe>,
    recipe_service: R,
    auth: A,
    state: ViewState,
}

impl<R: RecipeService, A: AuthService> RecipeListView<R, A> {
    /// Creates the view showing all of `recipes`. Favourites are not fetched
    /// until [`mount`](Self::mount).
    pub fn new(recipes: Vec<Recipe>, recipe_service: R, auth: A) -> Self {
        Self {
            recipes,
            recipe_service,
            auth,
            state: ViewState::default(),
        }
    }

    /// Runs the mount effect: fetches favourites when signed in.
    pub async fn mount(&mut self) {
        self.load_favourites().await;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe_service(&self) -> &R {
        &self.recipe_service
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Records the filter text. Nothing is filtered until [`search`](Self::search).
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.state.search_input = Some(text.into());
    }

    /// Toggles the search.
    ///
    /// Unfiltered with a non-empty pending term: filters the recipes through
    /// the recipe service. Filtered: shows all recipes again, whatever the
    /// pending term is.
    pub fn search(&mut self) {
        match &self.state.search {
            SearchState::Filtered { .. } => {
                tracing::debug!("Clearing search");
                self.state.search = SearchState::Unfiltered;
            }
            SearchState::Unfiltered => {
                let Some(term) = self
                    .state
                    .search_input
                    .as_deref()
                    .filter(|t| !t.is_empty())
                else {
                    return;
                };

                let matches = self.recipe_service.filter_recipes(&self.recipes, term);
                tracing::debug!("Search '{}' matched {} recipe(s)", term, matches.len());
                self.state.search = SearchState::Filtered {
                    term: term.to_string(),
                    matches,
                };
            }
        }
    }

    /// Takes a new recipe list from the parent.
    ///
    /// If it differs from the current one the view shows it in full: any
    /// search and the favourites view are switched off. Returns whether the
    /// list changed.
    pub fn on_recipes_changed(&mut self, current: Vec<Recipe>) -> bool {
        if self
            .recipe_service
            .compare_recipe_lists(&self.recipes, &current)
        {
            return false;
        }

        tracing::debug!(
            "Recipe list changed ({} -> {} recipes)",
            self.recipes.len(),
            current.len()
        );
        self.recipes = current;
        self.state.search = SearchState::Unfiltered;
        self.state.show_only_favourites = false;
        true
    }

    /// Fetches the signed-in user's favourites, bypassing any cached answer.
    ///
    /// Does nothing for signed-out users. On failure the error banner is set
    /// and the previous favourites are kept.
    pub async fn load_favourites(&mut self) {
        let Some(user_id) = self.signed_in_user() else {
            return;
        };

        let result = self
            .recipe_service
            .get_user_favourites(&user_id, true)
            .await;

        match result {
            Ok(favourites) => {
                self.state.favourites = Some(Favourites::from_recipes(&favourites));
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to retrieve favourites for {}: {}", user_id, e);
                self.state.error = Some(format!(
                    "An error occurred retrieving favourites: {}",
                    e
                ));
            }
        }
    }

    /// Switches between all recipes and starred recipes only.
    pub fn toggle_favourites_view(&mut self) {
        self.state.show_only_favourites = !self.state.show_only_favourites;
    }

    /// Stars a recipe for the signed-in user.
    pub async fn add_favourite(&mut self, recipe_id: &RecipeId) {
        self.change_favourite(FavouriteChange::Add, recipe_id).await;
    }

    /// Unstars a recipe for the signed-in user.
    pub async fn remove_favourite(&mut self, recipe_id: &RecipeId) {
        self.change_favourite(FavouriteChange::Remove, recipe_id)
            .await;
    }

    /// The server's answer replaces the favourites; nothing changes locally
    /// before it arrives.
    async fn change_favourite(&mut self, change: FavouriteChange, recipe_id: &RecipeId) {
        let Some(user_id) = self.signed_in_user() else {
            tracing::warn!("Not signed in, favourite {} left unchanged", recipe_id);
            return;
        };

        let result: ServiceResult<Vec<Recipe>> = match change {
            FavouriteChange::Add => {
                self.recipe_service
                    .add_favourite_recipe_to_user(&user_id, recipe_id)
                    .await
            }
            FavouriteChange::Remove => {
                self.recipe_service
                    .remove_favourite_recipe_from_user(&user_id, recipe_id)
                    .await
            }
        };

        match result {
            Ok(favourites) => {
                self.state.favourites = Some(Favourites::from_recipes(&favourites));
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("{:?} favourite {} failed: {}", change, recipe_id, e);
                self.state.error = Some(format!("{}: {}", change.error_prefix(), e));
            }
        }
    }

    fn signed_in_user(&self) -> Option<String> {
        if !self.auth.is_authenticated() {
            return None;
        }
        self.auth
            .user_profile()
            .map(|profile| profile.sub)
            .filter(|sub| !sub.is_empty())
    }

    /// The recipes currently displayed.
    pub fn displayed(&self) -> Vec<RecipeEntry<'_>> {
        derive_view(&self.state, &self.recipes)
    }

    /// Id of the recipe at 1-based `position` in the displayed list.
    pub fn entry_at(&self, position: usize) -> Option<RecipeId> {
        position
            .checked_sub(1)
            .and_then(|index| self.displayed().get(index).map(|e| e.recipe.id.clone()))
    }

    pub fn render(&self) -> RenderedList {
        let authenticated = self.auth.is_authenticated();
        let entries: Vec<RenderedEntry> = self
            .displayed()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RenderedEntry {
                position: index + 1,
                id: entry.recipe.id.clone(),
                name: entry.recipe.name.clone(),
                link: entry.recipe.link(),
                cooking_time: entry.recipe.cooking_time.clone(),
                ingredients: entry.recipe.main_ingredients.join(", "),
                is_favourite: entry.is_favourite,
                action: authenticated.then_some(if entry.is_favourite {
                    StarAction::Unstar
                } else {
                    StarAction::Star
                }),
            })
            .collect();

        // The favourites view explains an empty list before the search does.
        let empty_notice = if !entries.is_empty() {
            None
        } else if self.state.show_only_favourites {
            Some(EmptyNotice::NoStarredRecipes)
        } else if self.state.search_active() {
            Some(EmptyNotice::NoMatches)
        } else {
            Some(EmptyNotice::NoRecipes)
        };

        RenderedList {
            error: self.state.error.clone(),
            sign_in_prompt: (!authenticated).then_some(SIGN_IN_PROMPT),
            favourites_toggle: authenticated.then_some(if self.state.favourites_toggle_active() {
                "Show All"
            } else {
                "Show Starred Recipes"
            }),
            search_button: if self.state.search_active() {
                "Show All"
            } else {
                "Search"
            },
            entries,
            empty_notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::services::{filter_recipes, ServiceError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRecipeService {
        favourites: Mutex<Vec<Recipe>>,
        fail_with: Mutex<Option<String>>,
        filter_terms: Mutex<Vec<String>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockRecipeService {
        fn with_favourites(favourites: Vec<Recipe>) -> Self {
            Self {
                favourites: Mutex::new(favourites),
                ..Default::default()
            }
        }

        fn fail(&self, message: &str) {
            *self.fail_with.lock().unwrap() = Some(message.to_string());
        }

        fn succeed(&self) {
            *self.fail_with.lock().unwrap() = None;
        }

        fn check_failure(&self) -> ServiceResult<()> {
            match self.fail_with.lock().unwrap().clone() {
                Some(message) => Err(ServiceError::Other(message)),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl RecipeService for MockRecipeService {
        fn filter_recipes(&self, recipes: &[Recipe], term: &str) -> Vec<Recipe> {
            self.filter_terms.lock().unwrap().push(term.to_string());
            filter_recipes(recipes, term)
        }

        async fn get_user_favourites(
            &self,
            user_id: &str,
            force_refresh: bool,
        ) -> ServiceResult<Vec<Recipe>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("get {} {}", user_id, force_refresh));
            self.check_failure()?;
            Ok(self.favourites.lock().unwrap().clone())
        }

        async fn add_favourite_recipe_to_user(
            &self,
            user_id: &str,
            recipe_id: &RecipeId,
        ) -> ServiceResult<Vec<Recipe>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("add {} {}", user_id, recipe_id));
            self.check_failure()?;
            let mut favourites = self.favourites.lock().unwrap();
            if !favourites.iter().any(|r| &r.id == recipe_id) {
                favourites.push(Recipe::new(recipe_id.clone(), "starred"));
            }
            Ok(favourites.clone())
        }

        async fn remove_favourite_recipe_from_user(
            &self,
            user_id: &str,
            recipe_id: &RecipeId,
        ) -> ServiceResult<Vec<Recipe>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("remove {} {}", user_id, recipe_id));
            self.check_failure()?;
            let mut favourites = self.favourites.lock().unwrap();
            favourites.retain(|r| &r.id != recipe_id);
            Ok(favourites.clone())
        }
    }

    struct MockAuth {
        authenticated: bool,
        profile: Option<UserProfile>,
    }

    impl MockAuth {
        fn signed_in(sub: &str) -> Self {
            Self {
                authenticated: true,
                profile: Some(UserProfile::new(sub)),
            }
        }

        fn signed_out() -> Self {
            Self {
                authenticated: false,
                profile: None,
            }
        }
    }

    impl AuthService for MockAuth {
        fn is_authenticated(&self) -> bool {
            self.authenticated
        }

        fn user_profile(&self) -> Option<UserProfile> {
            self.profile.clone()
        }
    }

    fn soup() -> Recipe {
        Recipe::new("1", "Soup")
            .with_cooking_time("10m")
            .with_main_ingredients(vec!["Water".into()])
    }

    fn recipes() -> Vec<Recipe> {
        vec![
            soup(),
            Recipe::new("2", "Stew")
                .with_cooking_time("2h")
                .with_main_ingredients(vec!["Beef".into(), "Carrot".into()]),
            Recipe::new("3", "Carrot Cake")
                .with_cooking_time("1h")
                .with_main_ingredients(vec!["Carrot".into(), "Flour".into()]),
        ]
    }

    fn displayed_ids<R: RecipeService, A: AuthService>(view: &RecipeListView<R, A>) -> Vec<String> {
        view.displayed()
            .iter()
            .map(|e| e.recipe.id.to_string())
            .collect()
    }

    fn signed_in_view(favourites: Vec<Recipe>) -> RecipeListView<MockRecipeService, MockAuth> {
        RecipeListView::new(
            recipes(),
            MockRecipeService::with_favourites(favourites),
            MockAuth::signed_in("cook"),
        )
    }

    #[test]
    fn test_new_shows_parent_recipes() {
        let view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );

        assert_eq!(displayed_ids(&view), vec!["1", "2", "3"]);
        assert_eq!(view.state(), &ViewState::default());
    }

    #[test]
    fn test_search_single_recipe_scenario() {
        let mut view = RecipeListView::new(
            vec![soup()],
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );

        view.set_search_term("Soup");
        view.search();

        assert_eq!(
            *view.recipe_service().filter_terms.lock().unwrap(),
            vec!["Soup".to_string()]
        );
        assert!(view.state().search_active());
        let displayed = view.displayed();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].recipe, &soup());
    }

    #[test]
    fn test_set_search_term_does_not_filter() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );

        view.set_search_term("carrot");
        assert!(!view.state().search_active());
        assert_eq!(displayed_ids(&view), vec!["1", "2", "3"]);
        assert!(view.recipe_service().filter_terms.lock().unwrap().is_empty());
    }

    #[test]
    fn test_search_twice_restores_list() {
        for term in ["carrot", "soup", "nothing-matches", "2h"] {
            let mut view = RecipeListView::new(
                recipes(),
                MockRecipeService::default(),
                MockAuth::signed_out(),
            );

            view.set_search_term(term);
            view.search();
            assert!(view.state().search_active());
            view.search();

            assert!(!view.state().search_active());
            assert_eq!(displayed_ids(&view), vec!["1", "2", "3"], "term {}", term);
        }
    }

    #[test]
    fn test_search_toggle_ignores_new_term_while_active() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );

        view.set_search_term("carrot");
        view.search();
        assert_eq!(displayed_ids(&view), vec!["2", "3"]);

        view.set_search_term("soup");
        view.search();
        assert_eq!(displayed_ids(&view), vec!["1", "2", "3"]);
        assert_eq!(view.recipe_service().filter_terms.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_search_without_term_does_nothing() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );

        view.search();
        view.set_search_term("");
        view.search();

        assert!(!view.state().search_active());
        assert!(view.recipe_service().filter_terms.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mount_loads_favourites_when_signed_in() {
        let mut view = signed_in_view(vec![soup()]);
        view.mount().await;

        assert_eq!(view.recipe_service().calls(), vec!["get cook true"]);
        let favourites = view.state().favourites.as_ref().unwrap();
        assert!(favourites.contains(&RecipeId::new("1")));
        assert!(view.state().error.is_none());
    }

    #[tokio::test]
    async fn test_mount_skips_favourites_when_signed_out() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::with_favourites(vec![soup()]),
            MockAuth::signed_out(),
        );
        view.mount().await;

        assert!(view.recipe_service().calls().is_empty());
        assert!(view.state().favourites.is_none());
    }

    #[tokio::test]
    async fn test_load_favourites_failure_sets_error_and_keeps_previous() {
        let mut view = signed_in_view(vec![soup()]);
        view.mount().await;

        view.recipe_service().fail("timeout");
        view.load_favourites().await;

        let error = view.state().error.as_deref().unwrap();
        assert!(error.starts_with("An error occurred retrieving favourites"));
        assert!(error.contains("timeout"));
        assert_eq!(view.state().favourites.as_ref().unwrap().len(), 1);

        view.recipe_service().succeed();
        view.load_favourites().await;
        assert!(view.state().error.is_none());
    }

    #[tokio::test]
    async fn test_favourites_view_scenario() {
        let mut view = RecipeListView::new(
            vec![Recipe::new("1", "Soup"), Recipe::new("2", "Stew")],
            MockRecipeService::with_favourites(vec![Recipe::new("1", "Soup")]),
            MockAuth::signed_in("cook"),
        );
        view.mount().await;
        view.toggle_favourites_view();

        assert!(view.state().show_only_favourites);
        assert!(view.state().favourites_toggle_active());
        assert_eq!(displayed_ids(&view), vec!["1"]);

        view.toggle_favourites_view();
        assert_eq!(displayed_ids(&view), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_favourites_view_with_no_favourites_is_empty() {
        let mut view = signed_in_view(Vec::new());
        view.mount().await;
        view.toggle_favourites_view();

        assert!(view.displayed().is_empty());
        assert_eq!(
            view.render().empty_notice,
            Some(EmptyNotice::NoStarredRecipes)
        );
    }

    #[tokio::test]
    async fn test_add_and_remove_favourite() {
        let mut view = signed_in_view(Vec::new());
        view.mount().await;

        view.add_favourite(&RecipeId::new("2")).await;
        assert!(view.state().is_favourite(&recipes()[1]));

        view.remove_favourite(&RecipeId::new("2")).await;
        assert!(!view.state().is_favourite(&recipes()[1]));

        assert_eq!(
            view.recipe_service().calls(),
            vec!["get cook true", "add cook 2", "remove cook 2"]
        );
    }

    #[tokio::test]
    async fn test_add_favourite_failure_keeps_favourites() {
        let mut view = signed_in_view(vec![soup()]);
        view.mount().await;
        let before = view.state().favourites.clone();

        view.recipe_service().fail("network down");
        view.add_favourite(&RecipeId::new("2")).await;

        let error = view.state().error.as_deref().unwrap();
        assert!(error.contains("network down"));
        assert!(error.starts_with("An error occurred when adding favourite"));
        assert_eq!(view.state().favourites, before);
    }

    #[tokio::test]
    async fn test_remove_favourite_failure_keeps_favourites() {
        let mut view = signed_in_view(vec![soup()]);
        view.mount().await;

        view.recipe_service().fail("forbidden");
        view.remove_favourite(&RecipeId::new("1")).await;

        let error = view.state().error.as_deref().unwrap();
        assert!(error.starts_with("An error occurred when removing favourite"));
        assert!(view.state().is_favourite(&soup()));
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let mut view = signed_in_view(Vec::new());
        view.recipe_service().fail("network down");
        view.add_favourite(&RecipeId::new("1")).await;
        assert!(view.state().has_error());

        view.recipe_service().succeed();
        view.add_favourite(&RecipeId::new("1")).await;
        assert!(!view.state().has_error());
        assert!(view.state().is_favourite(&soup()));
    }

    #[tokio::test]
    async fn test_favourite_changes_need_sign_in() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );
        view.add_favourite(&RecipeId::new("1")).await;
        view.remove_favourite(&RecipeId::new("1")).await;
        assert!(view.recipe_service().calls().is_empty());

        let mut no_id = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth {
                authenticated: true,
                profile: Some(UserProfile::new("")),
            },
        );
        no_id.add_favourite(&RecipeId::new("1")).await;
        assert!(no_id.recipe_service().calls().is_empty());
        assert!(no_id.state().favourites.is_none());
    }

    #[tokio::test]
    async fn test_last_response_wins() {
        let mut view = signed_in_view(Vec::new());
        view.add_favourite(&RecipeId::new("1")).await;
        view.add_favourite(&RecipeId::new("2")).await;
        view.remove_favourite(&RecipeId::new("1")).await;

        let favourites = view.state().favourites.as_ref().unwrap();
        assert_eq!(favourites.len(), 1);
        assert!(favourites.contains(&RecipeId::new("2")));
    }

    #[test]
    fn test_changed_recipes_reset_view() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_in("cook"),
        );
        view.set_search_term("carrot");
        view.search();
        view.toggle_favourites_view();

        let mut updated = recipes();
        updated.push(Recipe::new("4", "Carrot Soup"));
        assert!(view.on_recipes_changed(updated));

        assert!(!view.state().search_active());
        assert!(!view.state().show_only_favourites);
        assert_eq!(displayed_ids(&view), vec!["1", "2", "3", "4"]);
        // The typed text survives so the next search can reuse it.
        assert_eq!(view.state().search_input.as_deref(), Some("carrot"));
    }

    #[test]
    fn test_equal_recipes_keep_view() {
        let mut view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );
        view.set_search_term("carrot");
        view.search();

        assert!(!view.on_recipes_changed(recipes()));
        assert!(view.state().search_active());
        assert_eq!(displayed_ids(&view), vec!["2", "3"]);
    }

    #[test]
    fn test_render_signed_out() {
        let view = RecipeListView::new(
            recipes(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );

        let rendered = view.render();
        assert_eq!(rendered.sign_in_prompt, Some(SIGN_IN_PROMPT));
        assert!(rendered.favourites_toggle.is_none());
        assert!(rendered.entries.iter().all(|e| e.action.is_none()));
        assert_eq!(rendered.search_button, "Search");
        assert_eq!(rendered.entries.len(), 3);
    }

    #[tokio::test]
    async fn test_render_signed_in() {
        let mut view = signed_in_view(vec![soup()]);
        view.mount().await;

        let rendered = view.render();
        assert!(rendered.sign_in_prompt.is_none());
        assert_eq!(rendered.favourites_toggle, Some("Show Starred Recipes"));
        assert_eq!(rendered.entries[0].action, Some(StarAction::Unstar));
        assert_eq!(rendered.entries[1].action, Some(StarAction::Star));
        assert_eq!(rendered.entries[0].link, "/recipe/1");
        assert_eq!(rendered.entries[1].ingredients, "Beef, Carrot");

        view.toggle_favourites_view();
        view.set_search_term("soup");
        view.search();
        let rendered = view.render();
        assert_eq!(rendered.favourites_toggle, Some("Show All"));
        assert_eq!(rendered.search_button, "Show All");
    }

    #[tokio::test]
    async fn test_empty_notice_precedence() {
        let mut view = signed_in_view(Vec::new());
        view.mount().await;

        view.set_search_term("tofu");
        view.search();
        assert_eq!(view.render().empty_notice, Some(EmptyNotice::NoMatches));

        // Both filters active and nothing shown: the favourites notice wins.
        view.toggle_favourites_view();
        assert_eq!(
            view.render().empty_notice,
            Some(EmptyNotice::NoStarredRecipes)
        );

        let empty = RecipeListView::new(
            Vec::new(),
            MockRecipeService::default(),
            MockAuth::signed_out(),
        );
        assert_eq!(empty.render().empty_notice, Some(EmptyNotice::NoRecipes));
    }

    #[tokio::test]
    async fn test_entry_at_follows_displayed_list() {
        let mut view = signed_in_view(vec![Recipe::new("3", "Carrot Cake")]);
        view.mount().await;

        assert_eq!(view.entry_at(2), Some(RecipeId::new("2")));
        assert_eq!(view.entry_at(0), None);
        assert_eq!(view.entry_at(4), None);

        view.toggle_favourites_view();
        assert_eq!(view.entry_at(1), Some(RecipeId::new("3")));
        assert_eq!(view.entry_at(2), None);
    }

    #[tokio::test]
    async fn test_parent_recipes_not_modified() {
        let mut view = signed_in_view(vec![soup()]);
        view.mount().await;
        view.toggle_favourites_view();
        let _ = view.render();

        assert_eq!(view.recipes(), recipes().as_slice());
    }
}
