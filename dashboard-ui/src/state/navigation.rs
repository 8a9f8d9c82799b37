//! Navigation Effects
//!
//! Runs on every location change: resolves the route, sets the document
//! title and applies the scroll offset the navigator decided on. Back and
//! forward restore where the page was left; everything else starts at the
//! top.
//!
//! Each browser history entry is tagged with its navigator key through
//! `history.state`, so a traversal is recognised by the state the browser
//! hands back rather than by listening for `popstate`.

use foodics_dashboard::router::{document_title, Navigator, RouteTable, ScrollOffset};
use leptos::*;
use leptos_router::use_location;
use wasm_bindgen::JsValue;

/// Session storage key holding the next free history key
const NEXT_KEY_STORAGE: &str = "foodics_nav_next_key";

/// Install the navigation effects; call from inside `<Router>`
pub fn init_navigation() {
    let location = use_location();
    let navigator = store_value(Navigator::starting_at(RouteTable::default(), saved_next_key()));

    // We restore offsets ourselves
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }

    create_effect(move |_| {
        let path = location.pathname.get();
        let from = current_scroll();
        let state_key = history_key();

        let result = navigator.try_update_value(|nav| {
            let visited = nav.visit(&path, state_key, from);
            (visited, nav.next_key())
        });

        match result {
            Some((Ok(navigation), next_key)) => {
                set_document_title(&navigation.title);
                if state_key != Some(navigation.key) {
                    tag_entry(navigation.key);
                    save_next_key(next_key);
                }
                scroll_to(navigation.scroll);
            }
            Some((Err(e), _)) => {
                web_sys::console::warn_1(&e.to_string().into());
                set_document_title(&document_title("Not Found"));
                scroll_to(ScrollOffset::ORIGIN);
            }
            None => {}
        }
    });
}

/// Navigator key stored on the browser's current history entry
fn history_key() -> Option<u64> {
    let state = web_sys::window()?.history().ok()?.state().ok()?;
    state.as_f64().filter(|k| *k >= 0.0).map(|k| k as u64)
}

/// Attach `key` to the current history entry
///
/// Deferred a frame so it lands on the entry the router pushes for a link
/// click, not on the one being left.
fn tag_entry(key: u64) {
    request_animation_frame(move || {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state(&JsValue::from_f64(key as f64), "") {
                web_sys::console::warn_2(&"could not tag history entry".into(), &e);
            }
        }
    });
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Next key from earlier loads in this tab, so keys never repeat
fn saved_next_key() -> u64 {
    session_storage()
        .and_then(|s| s.get_item(NEXT_KEY_STORAGE).ok().flatten())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

fn save_next_key(next_key: u64) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(NEXT_KEY_STORAGE, &next_key.to_string());
    }
}

fn current_scroll() -> ScrollOffset {
    web_sys::window()
        .map(|w| {
            ScrollOffset::new(
                w.scroll_x().unwrap_or_default(),
                w.scroll_y().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Scroll once the new view has been laid out
fn scroll_to(offset: ScrollOffset) {
    request_animation_frame(move || {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(offset.left, offset.top);
        }
    });
}
