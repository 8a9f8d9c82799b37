//! Posts REST Client
//!
//! HTTP client for the posts API. The public operations never fail: a
//! transport, status or decoding problem is logged and reported as `None`,
//! leaving the caller to decide its fallback.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::{FetchError, FetchResult};
use crate::endpoints::{self, DEFAULT_API_BASE};
use crate::model::{Comment, Post};

/// Configuration for the post service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the API (e.g., "https://jsonplaceholder.typicode.com")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Fetches posts and comments; holds no state between calls
pub struct PostService {
    client: Client,
    config: ServiceConfig,
}

impl PostService {
    /// Create a new service with the given configuration
    pub fn new(config: ServiceConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetch every post; `None` when the fetch failed
    pub async fn get_posts(&self) -> Option<Vec<Post>> {
        report(self.try_get_posts().await)
    }

    /// Fetch the comments of one post; `None` when the fetch failed
    pub async fn get_post_comments(&self, id: u64) -> Option<Vec<Comment>> {
        report(self.try_get_post_comments(id).await)
    }

    pub async fn try_get_posts(&self) -> FetchResult<Vec<Post>> {
        let url = endpoints::posts_url(&self.config.base_url);
        let posts: Vec<Post> = self.fetch_json(&url).await?;
        tracing::debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }

    pub async fn try_get_post_comments(&self, id: u64) -> FetchResult<Vec<Comment>> {
        let url = endpoints::post_comments_url(&self.config.base_url, id);
        let comments: Vec<Comment> = self.fetch_json(&url).await?;
        tracing::debug!(post_id = id, count = comments.len(), "fetched comments");
        Ok(comments)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn report<T>(result: FetchResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching data");
            None
        }
    }
}
