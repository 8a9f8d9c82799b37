//! Stat Card Component
//!
//! Displays a single figure about the post collection.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Label shown above the value
    label: &'static str,
    /// Value, recomputed reactively
    #[prop(into)]
    value: Signal<String>,
    /// Optional hint below the value
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
            {hint.map(|h| view! { <div class="mt-2 text-sm text-gray-500">{h}</div> })}
        </div>
    }
}
