//! API Access

mod client;

pub use client::{get_api_base, get_post_comments, get_posts};
