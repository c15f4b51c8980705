//! Client-side data layer for the catalog API.
//!
//! This is the consumer half of the wire contract: fetch, tolerate failure,
//! hand the views something renderable. Every list-shaped call maps a
//! non-2xx response to an empty result so a view degrades to an empty grid
//! instead of crashing; transport-level failures still propagate.

pub mod poster;

use std::collections::BTreeMap;

use reqwest::Client as HttpClient;

use crate::{
    error::AppResult,
    genre,
    models::{HomeRecommendation, RelatedRecommendation, Title, TitleSummary},
};

pub use poster::PosterResolver;

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the stored bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http_client.get(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// All genre rails keyed by the stored genre label. Non-2xx -> empty map.
    pub async fn movies_by_genre(&self) -> AppResult<BTreeMap<String, Vec<TitleSummary>>> {
        let response = self.get("/api/movies/by-genre").send().await?;
        if !response.status().is_success() {
            return Ok(BTreeMap::new());
        }
        Ok(response.json().await?)
    }

    /// The rail for one genre, located by normalizing both the requested
    /// name and each response key with the same canonical form the server
    /// uses. The two sides must stay behaviorally identical or this match
    /// silently fails, which is exactly why both call [`genre::normalize`].
    pub async fn genre_rail(&self, genre_name: &str) -> AppResult<Vec<TitleSummary>> {
        let wanted = genre::normalize(genre_name);
        let rails = self.movies_by_genre().await?;
        let rail = rails
            .into_iter()
            .find(|(label, _)| genre::normalize(label) == wanted)
            .map(|(_, titles)| titles)
            .unwrap_or_default();
        Ok(rail)
    }

    /// Title detail for the modal view. Unknown id (or any non-2xx) -> None.
    pub async fn movie(&self, show_id: &str) -> AppResult<Option<Title>> {
        let response = self
            .get(&format!("/api/movies/{}", urlencoding::encode(show_id)))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// A user's home-page rails. Non-2xx -> empty map.
    pub async fn home_recommendations(
        &self,
        user_id: i64,
    ) -> AppResult<BTreeMap<String, Vec<HomeRecommendation>>> {
        let response = self
            .get(&format!("/api/recommendations/home/{}", user_id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(BTreeMap::new());
        }
        Ok(response.json().await?)
    }

    /// "Also liked" entries for a title's detail view. Non-2xx -> empty.
    pub async fn related(&self, show_id: &str) -> AppResult<Vec<RelatedRecommendation>> {
        let response = self
            .get(&format!(
                "/api/recommendations/related/{}",
                urlencoding::encode(show_id)
            ))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(Vec::new());
        }
        Ok(response.json().await?)
    }

    /// Submit a star rating. Returns whether the server acknowledged it.
    pub async fn submit_rating(
        &self,
        user_id: i64,
        show_id: &str,
        rating: i64,
    ) -> AppResult<bool> {
        let mut request = self
            .http_client
            .post(format!("{}/api/ratings", self.base_url))
            .json(&serde_json::json!({
                "userId": user_id,
                "showId": show_id,
                "rating": rating,
            }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Ok(response.status().is_success())
    }
}
