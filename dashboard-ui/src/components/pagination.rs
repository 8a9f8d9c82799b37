//! Pagination Component
//!
//! Previous / next controls with the current page position.

use leptos::*;

use crate::state::global::DashboardState;

#[component]
pub fn Pagination() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let at_first = move || state.store.with(|s| s.is_first_page());
    let at_last = move || state.store.with(|s| s.is_last_page());
    let summary = move || {
        state.store.with(|s| {
            page_summary(
                s.current_page(),
                s.total_pages(),
                s.page_window(),
                s.filtered_posts().len(),
            )
        })
    };

    view! {
        <div class="flex items-center justify-between mt-4">
            <button
                class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 disabled:opacity-40 disabled:cursor-not-allowed"
                disabled=at_first
                on:click=move |_| state.prev_page()
            >
                "← Previous"
            </button>

            <span class="text-sm text-gray-400">{summary}</span>

            <button
                class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 disabled:opacity-40 disabled:cursor-not-allowed"
                disabled=at_last
                on:click=move |_| state.next_page()
            >
                "Next →"
            </button>
        </div>
    }
}

/// "Page 2 of 3 · 11–20 of 25"
fn page_summary(
    page: usize,
    total_pages: usize,
    window: Option<(usize, usize)>,
    total: usize,
) -> String {
    match window {
        Some((first, last)) => format!(
            "Page {} of {} · {}–{} of {}",
            page, total_pages, first, last, total
        ),
        None => "No posts".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(2, 3, Some((11, 20)), 25), "Page 2 of 3 · 11–20 of 25");
        assert_eq!(page_summary(1, 0, None, 0), "No posts");
    }
}
