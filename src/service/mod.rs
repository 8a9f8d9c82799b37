//! Post Service
//!
//! Native access to the posts API.
//!
//! - **Client**: reqwest-based `PostService` with `get_posts` / `get_post_comments`
//! - **Errors**: `FetchError`, the single failure kind, surfaced only by the
//!   `try_*` variants and in logs

mod client;
mod error;

pub use client::{PostService, ServiceConfig};
pub use error::{FetchError, FetchResult};
