//! Dashboard Root
//!
//! Owns the only cross-cutting piece of view state, the active tab, and
//! shapes the session's generated data for every widget on the page:
//!
//! - **charts**: Line, pie and bar datasets
//! - **table**: Workshop table rows and status badges
//!
//! The dataset is handed in at construction and shared behind an `Arc`;
//! switching tabs never regenerates it.

pub mod charts;
pub mod table;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub use charts::{
    nice_ceiling, palette_color, BarChart, BarGroup, BarSeries, LinePoint, LineSeries, PieChart,
    PieSlice, PALETTE,
};
pub use table::{StatusBadge, WorkshopRow, COLUMNS};

use crate::data::DashboardData;
use crate::stat::{StatCardSpec, StatIcon, StatTarget};

/// Top-level sections of the page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Workshops,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Overview, Tab::Workshops];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Workshops => "Workshops",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Page title shown in the header
pub const TITLE: &str = "CraftSense Admin";

/// View state of the dashboard page
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: Arc<DashboardData>,
    active_tab: Tab,
}

impl Dashboard {
    pub fn new(data: Arc<DashboardData>) -> Self {
        Self {
            data,
            active_tab: Tab::default(),
        }
    }

    pub fn data(&self) -> &Arc<DashboardData> {
        &self.data
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch sections; synchronous and total
    pub fn select(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(from = %self.active_tab, to = %tab, "Switching tab");
        }
        self.active_tab = tab;
    }

    /// The five headline cards, staggered 100 ms apart
    pub fn stat_cards(&self) -> Vec<StatCardSpec> {
        let stats = self.data.stats;
        let step = Duration::from_millis(100);

        vec![
            StatCardSpec::new(
                "Total Artisans",
                StatIcon::Users,
                StatTarget::integer(stats.total_artisans),
            )
            .trend(12)
            .delay(step),
            StatCardSpec::new(
                "Total Sales",
                StatIcon::ShoppingBag,
                StatTarget::integer(stats.total_sales),
            )
            .trend(8)
            .delay(step * 2),
            StatCardSpec::new(
                "Total Earnings",
                StatIcon::DollarSign,
                StatTarget::currency(stats.total_earnings),
            )
            .trend(15)
            .delay(step * 3),
            StatCardSpec::new(
                "Workshop Enrollments",
                StatIcon::GraduationCap,
                StatTarget::integer(stats.workshop_enrollments),
            )
            .trend(5)
            .delay(step * 4),
            StatCardSpec::new(
                "Eco-Friendly Products",
                StatIcon::Leaf,
                StatTarget::percent(stats.eco_friendly_percentage),
            )
            .trend(3)
            .delay(step * 5),
        ]
    }

    pub fn revenue_chart(&self) -> LineSeries {
        LineSeries::revenue(&self.data.revenue)
    }

    pub fn regional_chart(&self) -> PieChart {
        PieChart::regional(&self.data.regions)
    }

    pub fn product_chart(&self) -> BarChart {
        BarChart::product_performance(&self.data.sales)
    }

    /// Rows for the generated workshops; form submissions never appear here
    pub fn workshop_rows(&self) -> Vec<WorkshopRow> {
        self.data.workshops.iter().map(WorkshopRow::from).collect()
    }
}
