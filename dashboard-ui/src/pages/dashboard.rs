//! Dashboard Page
//!
//! Overview of the post collection: headline figures and the latest posts.

use std::collections::HashSet;

use foodics_dashboard::Post;
use leptos::*;
use leptos_router::*;

use crate::components::{Loading, PostModal, StatCard};
use crate::state::global::DashboardState;

/// Posts listed in the "Latest posts" section
const LATEST_COUNT: usize = 5;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch posts on first visit
    state.ensure_posts_loaded();

    let total_posts = Signal::derive(move || state.store.with(|s| s.posts().len().to_string()));
    let total_pages = Signal::derive(move || state.store.with(|s| s.unfiltered_pages().to_string()));
    let authors = Signal::derive(move || state.store.with(|s| author_count(s.posts()).to_string()));

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your posts at a glance"</p>
                </div>

                <A
                    href="/tables"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Browse all posts"
                </A>
            </div>

            // Summary row
            <section>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard label="Posts" value=total_posts />
                    <StatCard label="Pages" value=total_pages hint="at the current page size" />
                    <StatCard label="Authors" value=authors />
                </div>
            </section>

            // Latest posts
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Latest Posts"</h2>

                {move || {
                    if state.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <LatestPosts /> }.into_view()
                    }
                }}
            </section>

            <PostModal />
        </div>
    }
}

#[component]
fn LatestPosts() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let latest = move || {
        state
            .store
            .with(|s| s.posts().iter().take(LATEST_COUNT).cloned().collect::<Vec<Post>>())
    };

    view! {
        <div class="space-y-2">
            {move || {
                let posts = latest();
                if posts.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No posts yet"</p>
                    }.into_view()
                } else {
                    posts.into_iter().map(|post| {
                        let title = post.title.clone();
                        let id = post.id;
                        view! {
                            <div
                                class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0 cursor-pointer hover:text-primary-400"
                                on:click=move |_| state.open_post(post.clone())
                            >
                                <span class="capitalize">{title}</span>
                                <span class="text-gray-500 text-sm">{format!("#{}", id)}</span>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// Distinct authors among `posts`; posts without an author are not counted
fn author_count(posts: &[Post]) -> usize {
    posts
        .iter()
        .filter_map(|p| p.user_id)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_count() {
        let mut posts = vec![
            Post::new(1, "a", "b"),
            Post::new(2, "a", "b"),
            Post::new(3, "a", "b"),
        ];
        assert_eq!(author_count(&posts), 0);

        posts[0].user_id = Some(1);
        posts[1].user_id = Some(1);
        posts[2].user_id = Some(2);
        assert_eq!(author_count(&posts), 2);
    }
}
