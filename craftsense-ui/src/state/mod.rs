//! State Management
//!
//! Dashboard view state and toast queue shared through context.

pub mod global;

pub use global::{provide_dashboard_state, use_dashboard_state, DashboardState};
