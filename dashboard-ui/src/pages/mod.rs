//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod tables;

pub use dashboard::Dashboard;
pub use tables::Tables;
