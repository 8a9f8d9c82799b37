//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod pagination;
pub mod post_modal;
pub mod post_table;
pub mod search_box;
pub mod stat_card;

pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use pagination::Pagination;
pub use post_modal::PostModal;
pub use post_table::PostTable;
pub use search_box::SearchBox;
pub use stat_card::StatCard;
