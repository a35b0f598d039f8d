//! Benchmarks for mock data generation and dashboard shaping
//!
//! Run with: cargo bench

use chrono::{TimeZone, Utc};
use craftsense::config::MockConfig;
use craftsense::dashboard::Dashboard;
use craftsense::data::MockGenerator;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use std::time::Duration;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    for count in [8, 100, 1000] {
        let config = MockConfig {
            seed: Some(42),
            workshop_count: count,
            sales_count: count,
            revenue_months: 12,
        };

        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("dataset_{}", count), |b| {
            b.iter(|| MockGenerator::seeded(42).generate(black_box(&config), now))
        });
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let data = MockGenerator::seeded(7).generate(&MockConfig::default(), Utc::now());
    let dashboard = Dashboard::new(Arc::new(data));

    group.bench_function("stat_cards", |b| b.iter(|| black_box(&dashboard).stat_cards()));

    group.bench_function("charts", |b| {
        b.iter(|| {
            let d = black_box(&dashboard);
            (d.revenue_chart(), d.regional_chart(), d.product_chart())
        })
    });

    group.bench_function("workshop_rows", |b| {
        b.iter(|| black_box(&dashboard).workshop_rows())
    });

    group.finish();
}

fn bench_count_up(c: &mut Criterion) {
    let data = MockGenerator::seeded(7).generate(&MockConfig::default(), Utc::now());
    let cards = Dashboard::new(Arc::new(data)).stat_cards();

    // One animation frame for every card
    c.bench_function("count_up_frame", |b| {
        b.iter(|| {
            cards
                .iter()
                .map(|card| {
                    card.count_up(Duration::from_secs(2))
                        .display_at(black_box(Duration::from_millis(900)))
                })
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_generate, bench_dashboard, bench_count_up);
criterion_main!(benches);
