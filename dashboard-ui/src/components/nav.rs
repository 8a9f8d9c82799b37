//! Navigation Component
//!
//! Header bar with one link per entry of the route table. The highlighted
//! link follows the route the current location resolves to, so `/tables/`
//! and `/tables?q=x` still mark "Tables".

use foodics_dashboard::router::{Route, RouteName, RouteTable, ROUTES};
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();
    let active = Signal::derive(move || location.pathname.with(|path| active_route(path)));

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🍽️"</span>
                        <span class="text-xl font-bold text-white">"Foodics"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {ROUTES
                            .iter()
                            .map(|route| view! { <RouteLink route=*route active=active /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn RouteLink(route: Route, active: Signal<Option<RouteName>>) -> impl IntoView {
    let is_active = move || active.get() == Some(route.name);
    let class = move || {
        if is_active() {
            "px-4 py-2 rounded-lg bg-gray-700 text-white transition-colors"
        } else {
            "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        }
    };

    // Plain anchor: the router intercepts same-origin clicks
    view! {
        <a
            href=route.path
            class=class
            aria-current=move || is_active().then_some("page")
        >
            <span class="mr-2">{route_icon(route.name)}</span>
            {route.title}
        </a>
    }
}

/// Route the location resolves to; `None` on the not-found view
fn active_route(path: &str) -> Option<RouteName> {
    RouteTable::default().resolve(path).ok().map(|r| r.name)
}

fn route_icon(name: RouteName) -> &'static str {
    match name {
        RouteName::Dashboard => "📊",
        RouteName::Tables => "📋",
    }
}
