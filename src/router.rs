//! Route Table and Navigation History
//!
//! Maps the two dashboard paths to their views, renders the document title
//! for each navigation and remembers scroll offsets per history entry so
//! back/forward lands where the user left off.
//!
//! Every entry carries a key. The browser stores it in `history.state`, and
//! a traversal is matched to its entry by that key alone, never by path.

use serde::Serialize;
use thiserror::Error;

/// Suffix appended to every document title
pub const TITLE_SUFFIX: &str = "Foodics - Dashboard";

/// Views reachable through the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteName {
    Dashboard,
    Tables,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Dashboard => "dashboard",
            RouteName::Tables => "tables",
        }
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A static route with its metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub title: &'static str,
}

impl Route {
    /// `"<title> | Foodics - Dashboard"`
    pub fn document_title(&self) -> String {
        document_title(self.title)
    }
}

/// Render a document title for an arbitrary page label
pub fn document_title(label: &str) -> String {
    format!("{} | {}", label, TITLE_SUFFIX)
}

pub const ROUTES: [Route; 2] = [
    Route {
        path: "/",
        name: RouteName::Dashboard,
        title: "Dashboard",
    },
    Route {
        path: "/tables",
        name: RouteName::Tables,
        title: "Tables",
    },
];

/// Routing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Route not found: {0}")]
    NotFound(String),
}

/// Lookup table from path to route
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: ROUTES.to_vec(),
        }
    }
}

impl RouteTable {
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Resolve a navigation target, ignoring query, fragment and a trailing slash
    pub fn resolve(&self, target: &str) -> Result<&Route, RouteError> {
        let path = normalize_path(target);
        self.routes
            .iter()
            .find(|r| r.path == path)
            .ok_or_else(|| RouteError::NotFound(target.to_string()))
    }

    pub fn by_name(&self, name: RouteName) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }
}

fn normalize_path(target: &str) -> &str {
    let end = target.find(|c: char| c == '?' || c == '#').unwrap_or(target.len());
    let path = &target[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Scroll position of the page
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub const ORIGIN: ScrollOffset = ScrollOffset { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Outcome of a completed navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    /// Key of the history entry now shown
    pub key: u64,
    pub route: Route,
    /// Path as requested, after normalization
    pub path: String,
    pub title: String,
    /// Where the page should scroll to once the view is shown
    pub scroll: ScrollOffset,
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    key: u64,
    path: String,
    route: Route,
    scroll: ScrollOffset,
}

/// Session history with per-entry scroll memory
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    routes: RouteTable,
    entries: Vec<HistoryEntry>,
    cursor: usize,
    next_key: u64,
}

impl Navigator {
    pub fn new(routes: RouteTable) -> Self {
        Self::starting_at(routes, 0)
    }

    /// Hand out entry keys from `first_key` upward
    ///
    /// Lets a reloaded page avoid keys still attached to older browser
    /// entries.
    pub fn starting_at(routes: RouteTable, first_key: u64) -> Self {
        Self {
            routes,
            entries: Vec::new(),
            cursor: 0,
            next_key: first_key,
        }
    }

    /// Key the next pushed entry will get
    pub fn next_key(&self) -> u64 {
        self.next_key
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Route of the active history entry
    pub fn current(&self) -> Option<&Route> {
        self.entries.get(self.cursor).map(|e| &e.route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Navigate to a new entry; the page starts at the top
    ///
    /// Forward history is discarded. On error nothing changes.
    pub fn push(&mut self, target: &str, current_scroll: ScrollOffset) -> Result<Navigation, RouteError> {
        let route = *self.routes.resolve(target)?;
        let path = normalize_path(target).to_string();

        self.record(current_scroll);
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push(HistoryEntry {
            key,
            path: path.clone(),
            route,
            scroll: ScrollOffset::ORIGIN,
        });
        self.cursor = self.entries.len() - 1;

        tracing::debug!(path = %path, route = %route.name, key, "navigated");
        Ok(Navigation {
            key,
            route,
            path,
            title: route.document_title(),
            scroll: ScrollOffset::ORIGIN,
        })
    }

    /// Step back one entry, restoring its saved scroll offset
    pub fn back(&mut self, current_scroll: ScrollOffset) -> Option<Navigation> {
        if !self.can_go_back() {
            return None;
        }
        Some(self.move_to(self.cursor - 1, current_scroll))
    }

    /// Step forward one entry, restoring its saved scroll offset
    pub fn forward(&mut self, current_scroll: ScrollOffset) -> Option<Navigation> {
        if !self.can_go_forward() {
            return None;
        }
        Some(self.move_to(self.cursor + 1, current_scroll))
    }

    /// Jump to the entry with `key`, restoring its saved scroll offset
    ///
    /// `None` when no such entry exists.
    pub fn traverse_to(&mut self, key: u64, current_scroll: ScrollOffset) -> Option<Navigation> {
        let index = self.index_of(key)?;
        Some(self.move_to(index, current_scroll))
    }

    /// Handle a location change reported by the browser
    ///
    /// `state_key` is the key found in the browser's history state. When it
    /// names a known entry for `target` the change is a traversal to that
    /// entry; anything else (no key, a key from before a reload, or the key
    /// of the page being left) is a fresh push.
    pub fn visit(
        &mut self,
        target: &str,
        state_key: Option<u64>,
        current_scroll: ScrollOffset,
    ) -> Result<Navigation, RouteError> {
        self.routes.resolve(target)?;
        let path = normalize_path(target);

        let stored = state_key
            .and_then(|key| self.index_of(key))
            .filter(|&i| self.entries[i].path == path);

        match stored {
            Some(index) => Ok(self.move_to(index, current_scroll)),
            None => self.push(target, current_scroll),
        }
    }

    fn index_of(&self, key: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    fn record(&mut self, scroll: ScrollOffset) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            entry.scroll = scroll;
        }
    }

    fn move_to(&mut self, index: usize, current_scroll: ScrollOffset) -> Navigation {
        self.record(current_scroll);
        self.cursor = index;
        let entry = &self.entries[index];

        tracing::debug!(path = %entry.path, key = entry.key, top = entry.scroll.top, "restored history entry");
        Navigation {
            key: entry.key,
            route: entry.route,
            path: entry.path.clone(),
            title: entry.route.document_title(),
            scroll: entry.scroll,
        }
    }
}
