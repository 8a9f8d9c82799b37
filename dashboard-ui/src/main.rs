//! Foodics Dashboard
//!
//! Post browser built with Leptos (WASM).
//!
//! # Features
//!
//! - Overview of the post collection on the dashboard view
//! - Searchable, paginated post table on the tables view
//! - Post detail modal with comments
//! - Per-route document titles and scroll restoration
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Store and router logic come from the `foodics-dashboard`
//! crate; this crate wires them to signals, views and the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
