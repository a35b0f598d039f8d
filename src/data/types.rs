//! Core data types for the CraftSense dashboard
//!
//! This module defines the record shapes every other part of the crate reads:
//! - `Workshop`: a scheduled or on-demand session offered to artisans
//! - `SalesData`: per-product sales performance
//! - `DashboardStats`: the five headline counters
//! - `RevenueData`: one month of revenue
//! - `RegionShare`: one slice of the regional sales distribution
//! - `WorkshopDraft`: the partial workshop collected by the form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workshop offered on the marketplace
///
/// `price` is only meaningful when `is_paid` is true. Generated workshops
/// always carry a price, so consumers must check `is_paid` before showing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    /// Opaque unique identifier
    pub id: String,
    pub title: String,
    pub summary: String,
    pub instructor: String,
    /// Free-text category label
    pub category: String,
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_session_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub enrollments: u32,
    pub created_at: DateTime<Utc>,
    /// Average rating, 4.0-5.0 in generated data (not enforced)
    pub rating: f64,
    /// Integer percent, 0-100
    pub completion_rate: u8,
    pub reviews: u32,
}

impl Workshop {
    /// Price as a payment amount, present only for paid workshops
    pub fn payable_price(&self) -> Option<u32> {
        if self.is_paid {
            self.price
        } else {
            None
        }
    }
}

/// Sales performance of a single product line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    /// Composite "<type> <item>" label, e.g. "Ceramic Vase"
    pub product_name: String,
    pub sales: u32,
    /// Units sold times the average unit price
    pub revenue: u32,
    pub feedback: f64,
    /// Signed growth percent
    pub growth: f64,
}

/// Headline counters shown in the stat cards
///
/// The fields are independent aggregates with no relationship to the other
/// records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_artisans: u32,
    pub total_sales: u32,
    pub total_earnings: u32,
    pub workshop_enrollments: u32,
    pub eco_friendly_percentage: u32,
}

/// Revenue for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueData {
    /// Abbreviated month name ("Jan", "Feb", ...)
    pub month: String,
    pub revenue: u32,
    pub workshops: u32,
    pub products: u32,
}

/// Share of sales attributed to one region, in integer percent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionShare {
    pub name: String,
    pub value: u32,
}

impl RegionShare {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Everything generated for one dashboard session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub workshops: Vec<Workshop>,
    pub sales: Vec<SalesData>,
    /// Ordered oldest to newest
    pub revenue: Vec<RevenueData>,
    pub regions: Vec<RegionShare>,
}

/// The partial workshop record produced by the workshop form
///
/// Carries only what the form collects; ids, counters and timestamps are left
/// to whatever eventually persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopDraft {
    pub title: String,
    pub summary: String,
    pub instructor: String,
    pub category: String,
    pub is_paid: bool,
    pub price: u32,
    pub live_session_link: String,
    pub video_url: String,
}

impl From<&Workshop> for WorkshopDraft {
    fn from(workshop: &Workshop) -> Self {
        Self {
            title: workshop.title.clone(),
            summary: workshop.summary.clone(),
            instructor: workshop.instructor.clone(),
            category: workshop.category.clone(),
            is_paid: workshop.is_paid,
            price: workshop.price.unwrap_or_default(),
            live_session_link: workshop.live_session_link.clone().unwrap_or_default(),
            video_url: workshop.video_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_workshop;

    #[test]
    fn test_payable_price_requires_paid() {
        let mut workshop = sample_workshop();
        assert_eq!(workshop.payable_price(), None);

        workshop.is_paid = true;
        assert_eq!(workshop.payable_price(), Some(120));
    }

    #[test]
    fn test_workshop_serializes_camel_case() {
        let json = serde_json::to_value(sample_workshop()).unwrap();
        assert_eq!(json["isPaid"], false);
        assert_eq!(json["completionRate"], 88);
        assert!(json.get("videoUrl").is_none());
    }

    #[test]
    fn test_draft_from_workshop() {
        let draft = WorkshopDraft::from(&sample_workshop());
        assert_eq!(draft.title, "Eco-friendly Crafting");
        assert_eq!(draft.price, 120);
        assert_eq!(draft.video_url, "");
        assert!(!draft.is_paid);
    }
}
