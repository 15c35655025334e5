//! Recipe backend over the recipe REST API.
//!
//! Endpoints (relative to the configured base URL):
//!
//! ```text
//! GET    /recipes
//! GET    /users/{user}/favourites
//! POST   /users/{user}/favourites/{recipe}
//! DELETE /users/{user}/favourites/{recipe}
//! ```
//!
//! Every favourites endpoint answers with the user's current favourites as a
//! JSON array of recipes.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};

use super::{RecipeService, ServiceError, ServiceResult};
use crate::models::{Recipe, RecipeId};

pub struct HttpRecipeService {
    base_url: String,
    access_token: Option<String>,
    client: reqwest::Client,
    /// Last favourites answer per user, served when a refresh isn't forced.
    favourites: Mutex<HashMap<String, Vec<Recipe>>>,
}

impl HttpRecipeService {
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        timeout: Option<Duration>,
    ) -> ServiceResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
            client,
            favourites: Mutex::new(HashMap::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every recipe the API offers.
    pub async fn get_recipes(&self) -> ServiceResult<Vec<Recipe>> {
        let url = format!("{}/recipes", self.base_url);
        self.send(self.request(Method::GET, &url)).await
    }

    fn favourites_url(&self, user_id: &str) -> String {
        format!(
            "{}/users/{}/favourites",
            self.base_url,
            urlencoding::encode(user_id)
        )
    }

    fn favourite_url(&self, user_id: &str, recipe_id: &RecipeId) -> String {
        format!(
            "{}/{}",
            self.favourites_url(user_id),
            urlencoding::encode(recipe_id.as_str())
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ServiceResult<Vec<Recipe>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read {} error body: {}", status, e);
                    String::new()
                }
            };
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    fn cached_favourites(&self, user_id: &str) -> Option<Vec<Recipe>> {
        self.favourites
            .lock()
            .ok()
            .and_then(|cache| cache.get(user_id).cloned())
    }

    fn remember_favourites(&self, user_id: &str, favourites: &[Recipe]) {
        if let Ok(mut cache) = self.favourites.lock() {
            cache.insert(user_id.to_string(), favourites.to_vec());
        }
    }

    async fn mutate_favourite(
        &self,
        method: Method,
        user_id: &str,
        recipe_id: &RecipeId,
    ) -> ServiceResult<Vec<Recipe>> {
        let url = self.favourite_url(user_id, recipe_id);
        tracing::debug!("{} {}", method, url);

        let favourites = self.send(self.request(method, &url)).await?;
        self.remember_favourites(user_id, &favourites);
        Ok(favourites)
    }
}

impl RecipeService for HttpRecipeService {
    async fn get_user_favourites(
        &self,
        user_id: &str,
        force_refresh: bool,
    ) -> ServiceResult<Vec<Recipe>> {
        if !force_refresh {
            if let Some(cached) = self.cached_favourites(user_id) {
                return Ok(cached);
            }
        }

        let url = self.favourites_url(user_id);
        tracing::debug!("GET {}", url);

        let favourites = self.send(self.request(Method::GET, &url)).await?;
        self.remember_favourites(user_id, &favourites);
        Ok(favourites)
    }

    async fn add_favourite_recipe_to_user(
        &self,
        user_id: &str,
        recipe_id: &RecipeId,
    ) -> ServiceResult<Vec<Recipe>> {
        self.mutate_favourite(Method::POST, user_id, recipe_id)
            .await
    }

    async fn remove_favourite_recipe_from_user(
        &self,
        user_id: &str,
        recipe_id: &RecipeId,
    ) -> ServiceResult<Vec<Recipe>> {
        self.mutate_favourite(Method::DELETE, user_id, recipe_id)
            .await
    }
}
