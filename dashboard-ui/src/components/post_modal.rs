//! Post Modal Component
//!
//! Detail view of the selected post with its comments. Closes on the close
//! button, a click on the backdrop, or Escape.

use foodics_dashboard::Comment;
use leptos::*;

use crate::components::loading::InlineLoading;
use crate::state::global::DashboardState;

#[component]
pub fn PostModal() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let is_open = move || state.store.with(|s| s.is_modal_open());

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.store.with_untracked(|s| s.is_modal_open()) {
            state.close_modal();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=is_open>
            <div
                class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center p-4"
                on:click=move |_| state.close_modal()
            >
                <div
                    class="bg-gray-800 rounded-xl max-w-2xl w-full max-h-[85vh] overflow-y-auto p-6 shadow-xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <ModalBody />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ModalBody() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let post = move || state.store.with(|s| s.selected_post().cloned());
    let comments = move || state.store.with(|s| s.comments().to_vec());

    view! {
        <div class="flex items-start justify-between mb-4">
            <h2 class="text-2xl font-bold capitalize pr-4">
                {move || post().map(|p| p.title).unwrap_or_default()}
            </h2>
            <button
                class="text-gray-400 hover:text-white text-xl"
                aria-label="Close"
                on:click=move |_| state.close_modal()
            >
                "✕"
            </button>
        </div>

        <p class="text-gray-300 whitespace-pre-line">
            {move || post().map(|p| p.body).unwrap_or_default()}
        </p>

        <h3 class="text-lg font-semibold mt-6 mb-3 flex items-center space-x-2">
            <span>"Comments"</span>
            {move || state.comments_loading.get().then(|| view! { <InlineLoading label="Loading comments" /> })}
        </h3>

        <div class="space-y-3">
            {move || {
                let comments = comments();
                if comments.is_empty() && !state.comments_loading.get() {
                    view! {
                        <p class="text-gray-400 text-sm">"No comments"</p>
                    }.into_view()
                } else {
                    comments.into_iter().map(|c| view! { <CommentItem comment=c /> }).collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let name = comment.name().unwrap_or("Anonymous").to_string();
    let email = comment.email().unwrap_or_default().to_string();
    let body = comment.body().unwrap_or_default().to_string();

    view! {
        <div class="bg-gray-900 rounded-lg p-3">
            <div class="flex items-center justify-between text-sm">
                <span class="font-medium capitalize">{name}</span>
                <span class="text-gray-500">{email}</span>
            </div>
            <p class="text-gray-300 text-sm mt-1 whitespace-pre-line">{body}</p>
        </div>
    }
}
