//! App Root Component
//!
//! Main application component with routing and the dashboard state provider.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Nav;
use crate::pages::{Dashboard, Tables};
use crate::state::global::{provide_dashboard_state, DashboardState};
use crate::state::navigation::init_navigation;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    view! {
        <Router>
            <NavigationEffects />

            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/tables" view=Tables />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Title and scroll handling; must sit inside `<Router>`
#[component]
fn NavigationEffects() -> impl IntoView {
    init_navigation();
}

/// Footer showing the data source and fetch status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let source = api::get_api_base();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400 truncate">{format!("Source: {}", source)}</div>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        let count = state.store.with(|s| s.posts().len());
                        view! {
                            <span class="text-gray-400">{format!("{} posts loaded", count)}</span>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
