//! Mock Data Generator
//!
//! Produces randomized but shape-valid marketplace records. The RNG is
//! injected so callers choose between entropy (a fresh session), a fixed seed
//! (reproducible demos and tests) or their own `Rng` implementation.
//!
//! Every value falls inside the ranges documented on the constants below;
//! tests assert those ranges rather than exact values.

use chrono::{DateTime, Duration, Months, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use super::types::*;
use crate::config::MockConfig;

pub const ARTISANS_RANGE: RangeInclusive<u32> = 150..=300;
pub const SALES_RANGE: RangeInclusive<u32> = 1000..=5000;
pub const EARNINGS_RANGE: RangeInclusive<u32> = 40_000..=100_000;
pub const ENROLLMENTS_RANGE: RangeInclusive<u32> = 500..=1500;
pub const ECO_FRIENDLY_RANGE: RangeInclusive<u32> = 65..=95;

pub const WORKSHOP_PRICE_RANGE: RangeInclusive<u32> = 49..=299;
pub const WORKSHOP_ENROLLMENTS_RANGE: RangeInclusive<u32> = 20..=200;
pub const COMPLETION_RANGE: RangeInclusive<u8> = 70..=100;
pub const REVIEWS_RANGE: RangeInclusive<u32> = 5..=50;

pub const PRODUCT_SALES_RANGE: RangeInclusive<u32> = 50..=300;
pub const UNIT_PRICE_RANGE: RangeInclusive<u32> = 30..=200;

pub const MONTHLY_REVENUE_RANGE: RangeInclusive<u32> = 20_000..=80_000;
pub const MONTHLY_WORKSHOPS_RANGE: RangeInclusive<u32> = 10..=50;
pub const MONTHLY_PRODUCTS_RANGE: RangeInclusive<u32> = 100..=500;

pub const CATEGORIES: [&str; 6] = [
    "Textiles",
    "Ceramics",
    "Woodworking",
    "Jewelry",
    "Painting",
    "Sculpture",
];

pub const WORKSHOP_TITLES: [&str; 6] = [
    "Traditional Craft Mastery",
    "Modern Design Techniques",
    "Sustainable Materials Workshop",
    "Cultural Heritage in Crafts",
    "Innovation in Traditional Arts",
    "Eco-friendly Crafting",
];

pub const PRODUCT_TYPES: [&str; 6] = ["Handwoven", "Ceramic", "Wooden", "Metal", "Textile", "Glass"];
pub const PRODUCT_ITEMS: [&str; 6] = ["Bowl", "Vase", "Sculpture", "Jewelry", "Wall Art", "Basket"];

/// Regions and the raw (pre-normalization) draw range of each
pub const REGIONS: [(&str, RangeInclusive<u32>); 4] = [
    ("North America", 30..=40),
    ("Europe", 20..=30),
    ("Asia", 15..=25),
    ("Others", 10..=20),
];

const FIRST_NAMES: [&str; 12] = [
    "Amara", "Bjorn", "Chiara", "Dmitri", "Esi", "Farah", "Gustavo", "Hana", "Imani", "Jonas",
    "Keiko", "Lucia",
];

const LAST_NAMES: [&str; 12] = [
    "Okafor", "Lindqvist", "Rossi", "Volkov", "Mensah", "Haddad", "Pereira", "Sato", "Njoroge",
    "Becker", "Tanaka", "Moreno",
];

const LOREM: [&str; 24] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud",
];

const MEET_BASE_URL: &str = "https://meet.craftsense.com";
const VIDEO_BASE_URL: &str = "https://video.craftsense.com";

/// How far back a workshop's `created_at` may reach
const MAX_WORKSHOP_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// Random dashboard data generator
pub struct MockGenerator<R: Rng> {
    rng: R,
}

impl MockGenerator<StdRng> {
    /// Generator with a fixed seed; the same seed yields the same data
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when `seed` is set, entropy otherwise
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> MockGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a complete dataset for one session
    pub fn generate(&mut self, config: &MockConfig, now: DateTime<Utc>) -> DashboardData {
        let data = DashboardData {
            stats: self.stats(),
            workshops: self.workshops(config.workshop_count, now),
            sales: self.sales(config.sales_count),
            revenue: self.revenue(config.revenue_months, now),
            regions: self.regions(),
        };

        tracing::debug!(
            workshops = data.workshops.len(),
            sales = data.sales.len(),
            months = data.revenue.len(),
            "Generated dashboard data"
        );

        data
    }

    /// Headline counters
    pub fn stats(&mut self) -> DashboardStats {
        DashboardStats {
            total_artisans: self.rng.gen_range(ARTISANS_RANGE),
            total_sales: self.rng.gen_range(SALES_RANGE),
            total_earnings: self.rng.gen_range(EARNINGS_RANGE),
            workshop_enrollments: self.rng.gen_range(ENROLLMENTS_RANGE),
            eco_friendly_percentage: self.rng.gen_range(ECO_FRIENDLY_RANGE),
        }
    }

    /// `count` workshops created within the year before `now`
    pub fn workshops(&mut self, count: usize, now: DateTime<Utc>) -> Vec<Workshop> {
        (0..count).map(|_| self.workshop(now)).collect()
    }

    fn workshop(&mut self, now: DateTime<Utc>) -> Workshop {
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        let age = Duration::seconds(self.rng.gen_range(1..=MAX_WORKSHOP_AGE_SECS));

        Workshop {
            id: id.to_string(),
            title: self.pick(&WORKSHOP_TITLES).to_string(),
            summary: self.paragraph(),
            instructor: self.full_name(),
            category: self.pick(&CATEGORIES).to_string(),
            is_paid: self.rng.gen_bool(0.5),
            // Free workshops still carry a price; display code checks `is_paid`
            price: Some(self.rng.gen_range(WORKSHOP_PRICE_RANGE)),
            live_session_link: Some(format!("{}/{}", MEET_BASE_URL, self.alphanumeric(10))),
            video_url: Some(format!("{}/{}", VIDEO_BASE_URL, self.alphanumeric(8))),
            enrollments: self.rng.gen_range(WORKSHOP_ENROLLMENTS_RANGE),
            created_at: now - age,
            rating: self.tenths(40..=50),
            completion_rate: self.rng.gen_range(COMPLETION_RANGE),
            reviews: self.rng.gen_range(REVIEWS_RANGE),
        }
    }

    /// `count` product sales rows
    pub fn sales(&mut self, count: usize) -> Vec<SalesData> {
        (0..count)
            .map(|_| {
                let product_name = format!(
                    "{} {}",
                    self.pick(&PRODUCT_TYPES),
                    self.pick(&PRODUCT_ITEMS)
                );
                let sales = self.rng.gen_range(PRODUCT_SALES_RANGE);
                let avg_price = self.rng.gen_range(UNIT_PRICE_RANGE);

                SalesData {
                    product_name,
                    sales,
                    revenue: sales * avg_price,
                    feedback: self.tenths(40..=50),
                    growth: self.tenths(-200..=400),
                }
            })
            .collect()
    }

    /// One record per month, oldest first, ending with the month of `now`
    pub fn revenue(&mut self, months: usize, now: DateTime<Utc>) -> Vec<RevenueData> {
        let today = now.date_naive();

        let mut data: Vec<RevenueData> = (0..months)
            .map(|i| {
                let date = today
                    .checked_sub_months(Months::new(i as u32))
                    .unwrap_or(today);
                RevenueData {
                    month: date.format("%b").to_string(),
                    revenue: self.rng.gen_range(MONTHLY_REVENUE_RANGE),
                    workshops: self.rng.gen_range(MONTHLY_WORKSHOPS_RANGE),
                    products: self.rng.gen_range(MONTHLY_PRODUCTS_RANGE),
                }
            })
            .collect();

        data.reverse();
        data
    }

    /// Regional distribution, normalized to percentages
    pub fn regions(&mut self) -> Vec<RegionShare> {
        let mut shares: Vec<RegionShare> = REGIONS
            .iter()
            .map(|(name, range)| RegionShare::new(*name, self.rng.gen_range(range.clone())))
            .collect();

        normalize_shares(&mut shares);
        shares
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// A float with one decimal place drawn from `range` tenths
    fn tenths(&mut self, range: RangeInclusive<i32>) -> f64 {
        f64::from(self.rng.gen_range(range)) / 10.0
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.gen_range(6..=12);
        let words: Vec<&str> = (0..len).map(|_| self.pick(&LOREM)).collect();
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    fn paragraph(&mut self) -> String {
        let count = self.rng.gen_range(3..=5);
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Rescale shares so they sum to 100
///
/// Each value becomes `round(value / total * 100)`. Rounding can leave the sum
/// off by up to `len - 1`; that drift is not corrected. A zero total leaves
/// the shares untouched.
pub fn normalize_shares(shares: &mut [RegionShare]) {
    let total: u32 = shares.iter().map(|s| s.value).sum();
    if total == 0 {
        return;
    }

    for share in shares.iter_mut() {
        share.value = (f64::from(share.value) / f64::from(total) * 100.0).round() as u32;
    }
}
