//! # Foodics Dashboard
//!
//! A small dashboard over a public posts API: a searchable, paginated post
//! list, a post detail view with comments, and a two-view router.
//!
//! ## Modules
//!
//! - [`model`]: `Post` and `Comment` records
//! - [`store`]: the application store (pagination, search, modal state)
//! - [`router`]: route table, document titles and scroll-aware history
//! - [`endpoints`]: URL layout of the posts API
//! - [`service`]: native HTTP post service (feature `native`)
//! - [`config`]: TOML + environment configuration (feature `native`)
//!
//! Without the `native` feature only the target-independent modules are
//! built, which is how the browser frontend consumes this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foodics_dashboard::service::{PostService, ServiceConfig};
//! use foodics_dashboard::store::PostStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = PostService::new(ServiceConfig::default())?;
//!     let mut store = PostStore::new();
//!
//!     // A failed fetch leaves the store untouched
//!     if let Some(posts) = service.get_posts().await {
//!         store.set_posts(posts);
//!     }
//!
//!     store.set_search_term("qui");
//!     for post in store.paginated_posts() {
//!         println!("{:>4}  {}", post.id, post.title);
//!     }
//!     println!("Page {} of {}", store.current_page(), store.total_pages());
//!
//!     Ok(())
//! }
//! ```

pub mod endpoints;
pub mod model;
pub mod router;
pub mod store;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod service;

// Re-export top-level types for convenience
pub use model::{Comment, Post};
pub use router::{
    Navigation, Navigator, Route, RouteError, RouteName, RouteTable, ScrollOffset, TITLE_SUFFIX,
};
pub use store::{PostStore, POSTS_PER_PAGE};

#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, StoreConfig};
#[cfg(feature = "native")]
pub use service::{FetchError, FetchResult, PostService, ServiceConfig};
