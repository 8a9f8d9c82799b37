//! Dashboard State
//!
//! Reactive wrapper around the post store. The store itself holds all the
//! pagination and search rules; this module only turns its operations into
//! signal updates and kicks off fetches.

use foodics_dashboard::{Comment, Post, PostStore};
use leptos::*;

use crate::api;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Posts, search term, page cursor and modal state
    pub store: RwSignal<PostStore>,
    /// A post list fetch is in flight
    pub loading: RwSignal<bool>,
    /// A comments fetch is in flight
    pub comments_loading: RwSignal<bool>,
    /// At least one post list fetch has finished
    pub loaded: RwSignal<bool>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            store: create_rw_signal(PostStore::new()),
            loading: create_rw_signal(false),
            comments_loading: create_rw_signal(false),
            loaded: create_rw_signal(false),
        }
    }

    /// Fetch posts once per session
    pub fn ensure_posts_loaded(self) {
        if !self.loaded.get_untracked() && !self.loading.get_untracked() {
            self.load_posts();
        }
    }

    /// Fetch the post list; a failed fetch keeps the current list
    pub fn load_posts(self) {
        self.loading.set(true);
        spawn_local(async move {
            if let Some(posts) = api::get_posts().await {
                self.store.update(|s| s.set_posts(posts));
            }
            self.loading.set(false);
            self.loaded.set(true);
        });
    }

    /// Open the detail modal for `post` and fetch its comments
    pub fn open_post(self, post: Post) {
        let id = post.id;
        self.store.update(|s| s.open_modal(post));
        self.comments_loading.set(true);

        spawn_local(async move {
            let comments = api::get_post_comments(id).await;
            self.finish_comments(id, comments);
        });
    }

    /// Settle a comments fetch for `post_id`
    ///
    /// A response for a post that is no longer selected is ignored, loading
    /// flag included; the fetch for the newer selection still owns it.
    pub fn finish_comments(self, post_id: u64, comments: Option<Vec<Comment>>) {
        if !self.store.with_untracked(|s| s.is_selected(post_id)) {
            return;
        }
        if let Some(comments) = comments {
            self.store.update(|s| {
                s.set_comments_for(post_id, comments);
            });
        }
        self.comments_loading.set(false);
    }

    pub fn close_modal(self) {
        self.store.update(|s| s.close_modal());
    }

    pub fn next_page(self) {
        self.store.update(|s| s.next_page());
    }

    pub fn prev_page(self) {
        self.store.update(|s| s.prev_page());
    }

    pub fn go_to_page(self, page: usize) {
        self.store.update(|s| s.go_to_page(page));
    }

    pub fn set_search_term(self, term: String) {
        self.store.update(|s| s.set_search_term(term));
    }

    /// Owned copy of the current page, for rendering
    pub fn page_posts(self) -> Vec<Post> {
        self.store
            .with(|s| s.paginated_posts().into_iter().cloned().collect())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(count: u64) -> Vec<Post> {
        (1..=count)
            .map(|i| Post::new(i, format!("title {}", i), "body"))
            .collect()
    }

    #[test]
    fn test_page_navigation_through_signal() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.store.update(|s| s.set_posts(posts(25)));

        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.store.with(|s| s.current_page()), 3);
        assert_eq!(state.page_posts().len(), 5);

        state.prev_page();
        assert_eq!(state.page_posts()[0].id, 11);

        runtime.dispose();
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.store.update(|s| s.set_posts(posts(25)));
        state.go_to_page(3);
        state.set_search_term("TITLE 2".to_string());

        assert_eq!(state.store.with(|s| s.current_page()), 1);
        let ids: Vec<u64> = state.page_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 20, 21, 22, 23, 24, 25]);

        runtime.dispose();
    }

    #[test]
    fn test_stale_comments_keep_newer_fetch_loading() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.store.update(|s| s.set_posts(posts(3)));
        state.store.update(|s| s.open_modal(Post::new(1, "first", "b")));
        state.store.update(|s| s.open_modal(Post::new(2, "second", "b")));
        state.comments_loading.set(true);

        let stale = vec![Comment::new(serde_json::json!({ "postId": 1 }))];
        state.finish_comments(1, Some(stale));
        assert!(state.comments_loading.get_untracked());
        assert!(state.store.with(|s| s.comments().is_empty()));

        let fresh = vec![Comment::new(serde_json::json!({ "postId": 2 }))];
        state.finish_comments(2, Some(fresh));
        assert!(!state.comments_loading.get_untracked());
        assert_eq!(state.store.with(|s| s.comments()[0].post_id()), Some(2));

        runtime.dispose();
    }

    #[test]
    fn test_failed_comments_fetch_clears_loading() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.store.update(|s| s.open_modal(Post::new(4, "t", "b")));
        state.comments_loading.set(true);

        state.finish_comments(4, None);
        assert!(!state.comments_loading.get_untracked());
        assert!(state.store.with(|s| s.comments().is_empty()));

        runtime.dispose();
    }

    #[test]
    fn test_close_modal() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.store.update(|s| s.open_modal(Post::new(1, "t", "b")));
        state.close_modal();
        assert!(!state.store.with(|s| s.is_modal_open()));

        runtime.dispose();
    }
}
