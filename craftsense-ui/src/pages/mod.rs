//! Pages
//!
//! One component per dashboard tab.

pub mod overview;
pub mod workshops;

pub use overview::Overview;
pub use workshops::Workshops;
