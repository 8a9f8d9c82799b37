//! Application Store
//!
//! Owns the post list, the search term, the page cursor and the modal
//! state. Every change goes through a named operation; list views are
//! derived on read.
//!
//! Pagination always runs over the filtered list, and replacing either the
//! posts or the search term sends the cursor back to the first page so a
//! shrinking list can never strand the view on an empty page.

use std::num::NonZeroUsize;

use crate::model::{Comment, Post};

/// Default number of posts shown on one page
pub const POSTS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// Paginated, filterable post list plus modal state
#[derive(Debug, Clone, PartialEq)]
pub struct PostStore {
    current_page: usize,
    posts_per_page: NonZeroUsize,
    posts: Vec<Post>,
    search_term: String,
    is_modal_open: bool,
    selected_post: Option<Post>,
    comments: Vec<Comment>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    /// Empty store with the default page size
    pub fn new() -> Self {
        Self::with_page_size(POSTS_PER_PAGE)
    }

    /// Empty store with a custom page size
    pub fn with_page_size(posts_per_page: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            posts_per_page,
            posts: Vec::new(),
            search_term: String::new(),
            is_modal_open: false,
            selected_post: None,
            comments: Vec::new(),
        }
    }

    // ============ Mutations ============

    /// Replace the post list and return to the first page
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        tracing::debug!(count = posts.len(), "replacing posts");
        self.posts = posts;
        self.current_page = 1;
    }

    /// Replace the search term and return to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        tracing::debug!(term = %self.search_term, "search term updated");
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jump to `page`, clamped into the valid range
    pub fn go_to_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.current_page = page.clamp(1, last);
    }

    /// Select a post and open the detail modal
    ///
    /// Comments of a previously selected post are dropped.
    pub fn open_modal(&mut self, post: Post) {
        tracing::debug!(post_id = post.id, "opening post");
        self.selected_post = Some(post);
        self.comments.clear();
        self.is_modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.is_modal_open = false;
    }

    /// Replace the comments of the selected post
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    /// Apply comments fetched for `post_id`
    ///
    /// Returns false and leaves the store untouched when another post has
    /// been selected since the fetch started.
    pub fn set_comments_for(&mut self, post_id: u64, comments: Vec<Comment>) -> bool {
        if !self.is_selected(post_id) {
            tracing::debug!(post_id, "dropping comments for deselected post");
            return false;
        }
        self.comments = comments;
        true
    }

    // ============ State ============

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn posts_per_page(&self) -> usize {
        self.posts_per_page.get()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_modal_open
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_post.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_selected(&self, post_id: u64) -> bool {
        self.selected_post.as_ref().map(|p| p.id) == Some(post_id)
    }

    pub fn find_post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    // ============ Derived views ============

    /// Posts whose title contains the search term, ignoring case
    pub fn filtered_posts(&self) -> Vec<&Post> {
        if self.search_term.is_empty() {
            return self.posts.iter().collect();
        }

        let needle = self.search_term.to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.title_contains_lower(&needle))
            .collect()
    }

    /// Number of pages over the filtered list (0 when it is empty)
    pub fn total_pages(&self) -> usize {
        self.filtered_posts().len().div_ceil(self.posts_per_page.get())
    }

    /// Number of pages the whole list would span, ignoring the search term
    pub fn unfiltered_pages(&self) -> usize {
        self.posts.len().div_ceil(self.posts_per_page.get())
    }

    /// The current page of the filtered list
    pub fn paginated_posts(&self) -> Vec<&Post> {
        let per_page = self.posts_per_page.get();
        let start = (self.current_page - 1) * per_page;

        self.filtered_posts()
            .into_iter()
            .skip(start)
            .take(per_page)
            .collect()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// 1-based, inclusive range of filtered items shown on the current page
    ///
    /// `None` when the page is empty.
    pub fn page_window(&self) -> Option<(usize, usize)> {
        let shown = self.paginated_posts().len();
        if shown == 0 {
            return None;
        }
        let first = (self.current_page - 1) * self.posts_per_page.get() + 1;
        Some((first, first + shown - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_posts(count: u64) -> Vec<Post> {
        (1..=count)
            .map(|i| Post::new(i, format!("Post number {}", i), "body"))
            .collect()
    }

    fn store_with(count: u64) -> PostStore {
        let mut store = PostStore::new();
        store.set_posts(numbered_posts(count));
        store
    }

    fn page_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let store = PostStore::new();
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.posts_per_page(), 10);
        assert!(store.posts().is_empty());
        assert!(store.search_term().is_empty());
        assert!(!store.is_modal_open());
        assert!(store.selected_post().is_none());
        assert!(store.comments().is_empty());
        assert_eq!(store.total_pages(), 0);
        assert!(store.paginated_posts().is_empty());
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for per_page in 1..=12 {
            for count in 0..=40u64 {
                let mut store = PostStore::with_page_size(page_size(per_page));
                store.set_posts(numbered_posts(count));
                let expected = (count as usize + per_page - 1) / per_page;
                assert_eq!(store.total_pages(), expected, "count={count} per_page={per_page}");
            }
        }
    }

    #[test]
    fn test_twenty_five_posts_walk_to_last_page() {
        let mut store = store_with(25);
        assert_eq!(store.total_pages(), 3);
        assert_eq!(store.current_page(), 1);

        store.next_page();
        store.next_page();
        store.next_page();

        assert_eq!(store.current_page(), 3);
        assert_eq!(store.paginated_posts().len(), 5);
        assert_eq!(store.paginated_posts()[0].id, 21);
        assert!(store.is_last_page());
        assert_eq!(store.page_window(), Some((21, 25)));
    }

    #[test]
    fn test_prev_page_stops_at_first() {
        let mut store = store_with(25);
        store.prev_page();
        assert_eq!(store.current_page(), 1);

        store.next_page();
        store.prev_page();
        store.prev_page();
        assert_eq!(store.current_page(), 1);
        assert!(store.is_first_page());
    }

    #[test]
    fn test_next_page_on_empty_store_is_noop() {
        let mut store = PostStore::new();
        store.next_page();
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.page_window(), None);
    }

    #[test]
    fn test_page_length_never_exceeds_page_size() {
        let mut store = PostStore::with_page_size(page_size(7));
        store.set_posts(numbered_posts(30));

        for _ in 0..store.total_pages() {
            assert!(store.paginated_posts().len() <= 7);
            store.next_page();
        }
        assert_eq!(store.paginated_posts().len(), 30 % 7);
    }

    #[test]
    fn test_exact_multiple_fills_last_page() {
        let mut store = store_with(20);
        store.go_to_page(2);
        assert_eq!(store.paginated_posts().len(), 10);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = PostStore::new();
        store.set_posts(vec![
            Post::new(1, "sunt aut facere ABC", "b"),
            Post::new(2, "qui est esse", "b"),
            Post::new(3, "abcd repellat", "b"),
        ]);

        store.set_search_term("ABC");
        let upper: Vec<u64> = store.filtered_posts().iter().map(|p| p.id).collect();
        store.set_search_term("abc");
        let lower: Vec<u64> = store.filtered_posts().iter().map(|p| p.id).collect();

        assert_eq!(upper, vec![1, 3]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_empty_search_returns_everything_in_order() {
        let mut store = store_with(4);
        store.set_search_term("number 2");
        store.set_search_term("");
        let ids: Vec<u64> = store.filtered_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_without_matches() {
        let mut store = store_with(25);
        store.set_search_term("foo");
        assert!(store.filtered_posts().is_empty());
        assert_eq!(store.total_pages(), 0);
        assert!(store.paginated_posts().is_empty());

        store.next_page();
        assert_eq!(store.current_page(), 1);
    }

    #[test]
    fn test_pagination_runs_over_filtered_posts() {
        let mut posts = numbered_posts(30);
        for post in posts.iter_mut().filter(|p| p.id % 2 == 0) {
            post.title = format!("Even {}", post.id);
        }
        let mut store = PostStore::new();
        store.set_posts(posts);

        store.set_search_term("even");
        assert_eq!(store.total_pages(), 2);
        store.next_page();
        let ids: Vec<u64> = store.paginated_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![22, 24, 26, 28, 30]);
    }

    #[test]
    fn test_changing_search_resets_page() {
        let mut store = store_with(25);
        store.go_to_page(3);
        store.set_search_term("number 1");
        assert_eq!(store.current_page(), 1);
        assert!(!store.paginated_posts().is_empty());
    }

    #[test]
    fn test_replacing_posts_resets_page() {
        let mut store = store_with(25);
        store.go_to_page(3);
        store.set_posts(numbered_posts(4));
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.paginated_posts().len(), 4);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut store = store_with(25);
        store.go_to_page(99);
        assert_eq!(store.current_page(), 3);
        store.go_to_page(0);
        assert_eq!(store.current_page(), 1);

        let mut empty = PostStore::new();
        empty.go_to_page(5);
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn test_modal_lifecycle() {
        let mut store = store_with(3);
        let post = store.find_post(2).cloned().unwrap();

        store.open_modal(post.clone());
        assert!(store.is_modal_open());
        assert_eq!(store.selected_post(), Some(&post));

        store.set_comments(vec![Comment::new(serde_json::json!({ "id": 1 }))]);
        assert_eq!(store.comments().len(), 1);

        store.close_modal();
        assert!(!store.is_modal_open());
        assert_eq!(store.selected_post(), Some(&post));

        let other = store.find_post(3).cloned().unwrap();
        store.open_modal(other);
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_late_comments_for_previous_post_are_dropped() {
        let mut store = store_with(3);
        let first = store.find_post(1).cloned().unwrap();
        let second = store.find_post(2).cloned().unwrap();

        store.open_modal(first);
        store.open_modal(second.clone());

        let stale = vec![Comment::new(serde_json::json!({ "postId": 1, "id": 1 }))];
        assert!(!store.set_comments_for(1, stale));
        assert!(store.comments().is_empty());
        assert_eq!(store.selected_post(), Some(&second));

        let fresh = vec![
            Comment::new(serde_json::json!({ "postId": 2, "id": 5 })),
            Comment::new(serde_json::json!({ "postId": 2, "id": 6 })),
        ];
        assert!(store.set_comments_for(2, fresh));
        assert_eq!(store.comments().len(), 2);
        assert_eq!(store.comments()[0].post_id(), Some(2));
    }

    #[test]
    fn test_comments_without_selection_are_dropped() {
        let mut store = store_with(3);
        assert!(!store.is_selected(1));
        assert!(!store.set_comments_for(1, vec![Comment::new(serde_json::json!({}))]));
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_unfiltered_pages_ignores_search() {
        let mut store = store_with(25);
        store.set_search_term("number 1");
        assert_eq!(store.total_pages(), 2);
        assert_eq!(store.unfiltered_pages(), 3);

        let mut small = PostStore::with_page_size(page_size(4));
        small.set_posts(numbered_posts(9));
        assert_eq!(small.unfiltered_pages(), 3);
        assert_eq!(PostStore::new().unfiltered_pages(), 0);
    }

    #[test]
    fn test_find_post_missing() {
        let store = store_with(3);
        assert!(store.find_post(42).is_none());
    }
}
