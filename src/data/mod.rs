//! Dashboard Data
//!
//! Domain records and the generator that fills them:
//!
//! - **types**: Shared record shapes (Workshop, SalesData, DashboardStats, ...)
//! - **mock**: Randomized, range-checked data generation
//!
//! # Example
//!
//! ```rust
//! use craftsense::config::MockConfig;
//! use craftsense::data::MockGenerator;
//!
//! let data = MockGenerator::seeded(7).generate(&MockConfig::default(), chrono::Utc::now());
//! assert_eq!(data.workshops.len(), 8);
//! assert_eq!(data.revenue.len(), 12);
//! ```

pub mod mock;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use mock::{normalize_shares, MockGenerator};
pub use types::{
    DashboardData, DashboardStats, RegionShare, RevenueData, SalesData, Workshop, WorkshopDraft,
};
