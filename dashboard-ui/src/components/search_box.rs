//! Search Box Component
//!
//! Title filter for the post table.

use leptos::*;

use crate::state::global::DashboardState;

#[component]
pub fn SearchBox() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let term = move || state.store.with(|s| s.search_term().to_string());

    view! {
        <div class="relative">
            <input
                type="search"
                placeholder="Search posts by title..."
                class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-primary-500"
                prop:value=term
                on:input=move |ev| state.set_search_term(event_target_value(&ev))
            />
        </div>
    }
}
