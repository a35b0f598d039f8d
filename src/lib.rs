//! # CraftSense
//!
//! Admin dashboard core for an artisan marketplace: headline stats, revenue
//! and product charts, a workshop table and a workshop creation form, all fed
//! by synthetic data generated in-process.
//!
//! ## Features
//!
//! - **Mock data**: Seedable generator with range-checked records
//! - **Stat cards**: Count-up animation model with explicit value formats
//! - **Workshop form**: Editing → submitting → resolved state machine with toasts
//! - **Cancellable submission**: Pending work is aborted when the form goes away
//! - **Dashboard**: Tabs, chart datasets and table rows shared by every renderer
//!
//! ## Modules
//!
//! - [`data`]: Domain records and the mock generator
//! - [`stat`]: Stat card formatting and count-up animation
//! - [`form`]: Workshop form state, notifications and submission
//! - [`dashboard`]: Tab state, chart datasets and table rows
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use craftsense::config::MockConfig;
//! use craftsense::dashboard::{Dashboard, Tab};
//! use craftsense::data::MockGenerator;
//!
//! let data = MockGenerator::seeded(42).generate(&MockConfig::default(), chrono::Utc::now());
//! let mut dashboard = Dashboard::new(Arc::new(data));
//!
//! for card in dashboard.stat_cards() {
//!     println!("{}: {}", card.label, card.target.display());
//! }
//!
//! dashboard.select(Tab::Workshops);
//! assert_eq!(dashboard.workshop_rows().len(), 8);
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod form;
#[cfg(feature = "runtime")]
pub mod logging;
pub mod stat;

pub use config::Config;
pub use dashboard::{Dashboard, Tab};
pub use data::{DashboardData, MockGenerator, Workshop, WorkshopDraft};
pub use form::{FormError, WorkshopForm, WorkshopSink};
pub use stat::{StatCardSpec, StatFormat, StatTarget};
