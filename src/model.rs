//! Data Model
//!
//! Records returned by the posts API.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A blog post
///
/// `id`, `title` and `body` must be present on the wire; a response missing
/// any of them fails to decode instead of producing a half-filled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    /// Publication date as sent by the API (empty when not provided)
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            date: String::new(),
            user_id: None,
        }
    }

    /// Set the publication date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Parse `date` as RFC 3339 or `YYYY-MM-DD`
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Case-insensitive title match; `needle` must already be lowercase
    pub(crate) fn title_contains_lower(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

/// A comment attached to a post
///
/// The shape is owned by the API and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(Value);

impl Comment {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw JSON as received
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn post_id(&self) -> Option<u64> {
        self.0.get("postId").and_then(Value::as_u64)
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    pub fn body(&self) -> Option<&str> {
        self.str_field("body")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_without_date_decodes() {
        let post: Post = serde_json::from_value(json!({
            "userId": 1,
            "id": 7,
            "title": "magnam facilis autem",
            "body": "dolore placeat quibusdam"
        }))
        .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, Some(1));
        assert!(post.date.is_empty());
        assert_eq!(post.published_on(), None);
    }

    #[test]
    fn test_post_missing_title_is_rejected() {
        let result = serde_json::from_value::<Post>(json!({
            "id": 1,
            "body": "no title here"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_post_wrong_id_type_is_rejected() {
        let result = serde_json::from_value::<Post>(json!({
            "id": "one",
            "title": "t",
            "body": "b"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_published_on() {
        let post = Post::new(1, "t", "b").with_date("2024-03-05");
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2024, 3, 5));

        let post = Post::new(1, "t", "b").with_date("2024-03-05T10:30:00Z");
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2024, 3, 5));

        let post = Post::new(1, "t", "b").with_date("last tuesday");
        assert_eq!(post.published_on(), None);
    }

    #[test]
    fn test_comment_passthrough() {
        let raw = json!({
            "postId": 3,
            "id": 11,
            "name": "fugit labore quia",
            "email": "Veronica_Goodwin@timmothy.net",
            "body": "ut dolorum nostrum",
            "extra": { "nested": [1, 2, 3] }
        });

        let comment: Comment = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(comment.post_id(), Some(3));
        assert_eq!(comment.name(), Some("fugit labore quia"));
        assert_eq!(comment.email(), Some("Veronica_Goodwin@timmothy.net"));
        assert_eq!(serde_json::to_value(&comment).unwrap(), raw);
    }

    #[test]
    fn test_comment_accessors_tolerate_other_shapes() {
        let comment = Comment::new(json!("just a string"));
        assert_eq!(comment.body(), None);
        assert_eq!(comment.post_id(), None);
    }
}
