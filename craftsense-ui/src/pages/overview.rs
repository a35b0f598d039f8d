//! Overview Page
//!
//! Stat cards followed by the revenue, regional and product charts.

use leptos::*;

use crate::components::{BarChartView, LineChartView, PieChartView, StatCard};
use crate::state::use_dashboard_state;

/// Overview tab
#[component]
pub fn Overview() -> impl IntoView {
    let state = use_dashboard_state();
    let (cards, revenue, regions, products) = state.dashboard.with_untracked(|d| {
        (d.stat_cards(), d.revenue_chart(), d.regional_chart(), d.product_chart())
    });

    let revenue_title = revenue.title;
    let regions_title = regions.title;
    let products_title = products.title;

    view! {
        <div class="space-y-8">
            <section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4">
                {cards.into_iter().map(|spec| view! { <StatCard spec=spec /> }).collect_view()}
            </section>

            <section class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-white rounded-xl p-6 shadow-sm">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{revenue_title}</h2>
                    <LineChartView series=revenue />
                </div>
                <div class="bg-white rounded-xl p-6 shadow-sm">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{regions_title}</h2>
                    <PieChartView chart=regions />
                </div>
            </section>

            <section class="bg-white rounded-xl p-6 shadow-sm">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{products_title}</h2>
                <BarChartView chart=products />
            </section>
        </div>
    }
}
