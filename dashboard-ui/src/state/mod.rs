//! State Management
//!
//! Dashboard state and navigation side effects.

pub mod global;
pub mod navigation;

pub use global::{provide_dashboard_state, DashboardState};
pub use navigation::init_navigation;
