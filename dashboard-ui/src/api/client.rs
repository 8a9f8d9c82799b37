//! HTTP API Client
//!
//! Fetches posts and comments from the posts API. Failures are logged to
//! the console and come back as `None`; callers keep whatever they had.

use foodics_dashboard::endpoints::{self, DEFAULT_API_BASE};
use foodics_dashboard::{Comment, Post};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_URL_STORAGE_KEY: &str = "foodics_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    endpoints::normalize_base(&url).to_string()
}

/// Fetch every post
pub async fn get_posts() -> Option<Vec<Post>> {
    report(fetch_json(&endpoints::posts_url(&get_api_base())).await)
}

/// Fetch the comments of one post
pub async fn get_post_comments(id: u64) -> Option<Vec<Comment>> {
    report(fetch_json(&endpoints::post_comments_url(&get_api_base(), id)).await)
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), url));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

fn report<T>(result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            web_sys::console::error_1(&format!("Error fetching data: {}", e).into());
            None
        }
    }
}
