//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod header;
pub mod stat_card;
pub mod toast;
pub mod workshop_form;
pub mod workshop_table;

pub use chart::{BarChartView, LineChartView, PieChartView};
pub use header::Header;
pub use stat_card::StatCard;
pub use toast::Toaster;
pub use workshop_form::WorkshopFormView;
pub use workshop_table::WorkshopTable;
