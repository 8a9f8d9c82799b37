//! Endpoint layout of the posts API
//!
//! Shared by the native service and the browser client so both hit the
//! same URLs.

/// Public JSONPlaceholder instance
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Strip trailing slashes so paths can be appended safely
pub fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `GET {base}/posts`
pub fn posts_url(base: &str) -> String {
    format!("{}/posts", normalize_base(base))
}

/// `GET {base}/posts/{id}/comments`
pub fn post_comments_url(base: &str, id: u64) -> String {
    format!("{}/posts/{}/comments", normalize_base(base), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_url() {
        assert_eq!(
            posts_url(DEFAULT_API_BASE),
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(posts_url("http://localhost:3000//"), "http://localhost:3000/posts");
    }

    #[test]
    fn test_post_comments_url() {
        assert_eq!(
            post_comments_url("http://localhost:3000/", 12),
            "http://localhost:3000/posts/12/comments"
        );
    }
}
