//! Tables Page
//!
//! Searchable, paginated post table with the detail modal.

use leptos::*;

use crate::components::{ListSkeleton, Pagination, PostModal, PostTable, SearchBox};
use crate::state::global::DashboardState;

/// Tables page component
#[component]
pub fn Tables() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    state.ensure_posts_loaded();

    let per_page = state.store.with_untracked(|s| s.posts_per_page());

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Tables"</h1>
                <p class="text-gray-400 mt-1">"All posts, searchable by title"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <SearchBox />

                <div class="mt-4">
                    {move || {
                        if state.loading.get() {
                            view! { <ListSkeleton count=per_page /> }.into_view()
                        } else {
                            view! { <PostTable /> }.into_view()
                        }
                    }}
                </div>

                <Pagination />
            </section>

            <PostModal />
        </div>
    }
}
