use async_trait::async_trait;

use super::types::{PopularMovies, Suggestions};
use crate::config::BackendConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Read-only source of the popular-movies list.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn popular_movies(&self) -> Result<PopularMovies, ApiError>;
}

/// Read-only source of search-box suggestions.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggestions(&self, query: &str) -> Result<Suggestions, ApiError>;
}

/// HTTP client for the two backend endpoints this page consumes.
pub struct ApiClient {
    http: reqwest::Client,
    popular_url: String,
    suggestions_url: String,
}

impl ApiClient {
    pub fn new(backend: &BackendConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            popular_url: join_url(&backend.base_url, &backend.popular_path),
            suggestions_url: join_url(&backend.base_url, &backend.suggestions_path),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Backend(format!("{} returned {}", url, status)));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MovieSource for ApiClient {
    async fn popular_movies(&self) -> Result<PopularMovies, ApiError> {
        self.get_json(&self.popular_url).await
    }
}

#[async_trait]
impl SuggestionSource for ApiClient {
    async fn suggestions(&self, query: &str) -> Result<Suggestions, ApiError> {
        let url = suggestions_url_for(&self.suggestions_url, query);
        self.get_json(&url).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn suggestions_url_for(endpoint: &str, query: &str) -> String {
    format!("{}?q={}", endpoint, urlencoding::encode(query))
}
