//! Deterministic records for unit tests

use chrono::{TimeZone, Utc};

use super::types::*;

pub fn sample_workshop() -> Workshop {
    Workshop {
        id: "w-1".to_string(),
        title: "Eco-friendly Crafting".to_string(),
        summary: "Working with reclaimed materials.".to_string(),
        instructor: "Ada Weaver".to_string(),
        category: "Textiles".to_string(),
        is_paid: false,
        price: Some(120),
        live_session_link: Some("https://meet.craftsense.com/abcdefghij".to_string()),
        video_url: None,
        enrollments: 42,
        created_at: Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap(),
        rating: 4.6,
        completion_rate: 88,
        reviews: 12,
    }
}

pub fn sample_data() -> DashboardData {
    let mut paid = sample_workshop();
    paid.id = "w-2".to_string();
    paid.title = "Modern Design Techniques".to_string();
    paid.instructor = "Bo Potter".to_string();
    paid.category = "Ceramics".to_string();
    paid.is_paid = true;
    paid.price = Some(199);

    DashboardData {
        stats: DashboardStats {
            total_artisans: 212,
            total_sales: 3456,
            total_earnings: 45000,
            workshop_enrollments: 987,
            eco_friendly_percentage: 81,
        },
        workshops: vec![sample_workshop(), paid],
        sales: vec![
            SalesData {
                product_name: "Ceramic Vase".to_string(),
                sales: 120,
                revenue: 6000,
                feedback: 4.5,
                growth: 12.5,
            },
            SalesData {
                product_name: "Wooden Bowl".to_string(),
                sales: 80,
                revenue: 2400,
                feedback: 4.1,
                growth: -3.2,
            },
        ],
        revenue: ["Jan", "Feb", "Mar"]
            .iter()
            .zip([20000, 35000, 50000])
            .map(|(month, revenue)| RevenueData {
                month: month.to_string(),
                revenue,
                workshops: 20,
                products: 300,
            })
            .collect(),
        regions: vec![
            RegionShare::new("North America", 40),
            RegionShare::new("Europe", 30),
            RegionShare::new("Asia", 20),
            RegionShare::new("Others", 10),
        ],
    }
}
