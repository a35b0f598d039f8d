//! Stat Cards
//!
//! - **format**: Explicit value formats (integer, currency, percent)
//! - **card**: Count-up animation, trend badge and entrance timing

pub mod card;
pub mod format;

pub use card::{
    ease_out, CountUp, EntranceTimeline, StatCardSpec, StatIcon, Trend, TrendDirection,
    DEFAULT_COUNT_UP,
};
pub use format::{group_thousands, StatError, StatFormat, StatTarget};
