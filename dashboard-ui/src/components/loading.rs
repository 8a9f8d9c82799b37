//! Loading States
//!
//! Placeholders shown while posts or comments are in flight.

use leptos::*;

/// Spinner with a caption, used where a whole section waits on the post list
#[component]
pub fn Loading(#[prop(default = "Fetching posts...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3" role="status">
            <div class="loading-spinner w-8 h-8" />
            <span class="text-sm text-gray-400">{message}</span>
        </div>
    }
}

/// Small spinner next to a heading
#[component]
pub fn InlineLoading(#[prop(default = "Loading")] label: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" role="status" aria-label=label />
    }
}

/// Placeholder rows shaped like the post table: id, title, excerpt and date
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="divide-y divide-gray-700 animate-pulse" aria-busy="true">
            {(0..count)
                .map(|row| {
                    // Stagger title widths so the rows don't look cloned
                    let title_width = ["w-2/3", "w-1/2", "w-3/4"][row % 3];
                    view! {
                        <div class="flex items-center space-x-4 py-3 px-2">
                            <div class="bg-gray-700 rounded h-4 w-10" />
                            <div class=format!("bg-gray-700 rounded h-4 {}", title_width) />
                            <div class="bg-gray-700 rounded h-4 flex-1 hidden md:block" />
                            <div class="bg-gray-700 rounded h-4 w-24" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
