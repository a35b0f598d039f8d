//! Stat Card Component
//!
//! Headline number that counts up from zero after a staggered entrance.

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use std::time::Duration;

use craftsense::stat::{StatCardSpec, TrendDirection};

use crate::state::use_dashboard_state;

/// Roughly one animation frame
const FRAME: Duration = Duration::from_millis(16);

/// Stat card component
#[component]
pub fn StatCard(spec: StatCardSpec) -> impl IntoView {
    let state = use_dashboard_state();
    let animation = state.animation.get_value();

    let count_up = spec.count_up(animation.count_up());
    let timeline = spec.timeline();
    let settle = count_up.total().max(timeline.caption);

    let started = js_sys::Date::now();
    let (elapsed, set_elapsed) = create_signal(Duration::ZERO);

    // The ticker stops itself once everything has settled, and is cleared on
    // unmount so it never writes to a disposed signal.
    let ticker = store_value(None::<IntervalHandle>);
    let tick = move || {
        let now = Duration::from_secs_f64(((js_sys::Date::now() - started) / 1000.0).max(0.0));
        set_elapsed.set(now);
        if now >= settle {
            if let Some(handle) = ticker.get_value() {
                handle.clear();
            }
        }
    };
    match set_interval_with_handle(tick, FRAME) {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(e) => web_sys::console::error_1(&e),
    }
    on_cleanup(move || {
        if let Some(handle) = ticker.get_value() {
            handle.clear();
        }
    });

    let shown = move |at: Duration| elapsed.get() >= at;
    let entrance_style = format!("transition-duration: {}ms", animation.entrance_ms);

    // Badge and caption only appear when the card carries a trend
    let trend = spec.visible_trend().map(|trend| {
        let color = match trend.direction() {
            TrendDirection::Down => "bg-red-100 text-red-700",
            _ => "bg-green-100 text-green-700",
        };
        view! {
            <div class="flex items-center space-x-2 mt-2">
                <span class=move || format!(
                    "inline-block px-2 py-0.5 rounded-full text-xs font-semibold transition-all duration-500 {} {}",
                    color,
                    if shown(timeline.trend) { "opacity-100 translate-x-0" } else { "opacity-0 -translate-x-2" }
                )>
                    {trend.label()}
                </span>
                <span class=move || format!(
                    "text-xs text-gray-400 transition-opacity duration-500 {}",
                    if shown(timeline.caption) { "opacity-100" } else { "opacity-0" }
                )>
                    "vs last month"
                </span>
            </div>
        }
    });

    view! {
        <div
            class=move || format!(
                "relative overflow-hidden bg-white rounded-xl p-5 shadow-sm border border-gray-100 \
                 transition-all ease-out {}",
                if shown(timeline.card) { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4" }
            )
            style=entrance_style
        >
            // Top accent bar
            <div
                class="absolute top-0 left-0 h-1 bg-indigo-500 transition-all duration-700"
                style=move || format!("width: {}%", if shown(timeline.top_bar) { 100 } else { 0 })
            />

            <div class="flex items-center justify-between">
                <span class="text-gray-500 text-sm">{spec.label}</span>
                <span class=move || format!(
                    "text-2xl transition-transform duration-500 {}",
                    if shown(timeline.icon) { "scale-100" } else { "scale-0" }
                )>
                    {spec.icon.glyph()}
                </span>
            </div>

            <div class="text-3xl font-bold text-gray-900 mt-2 tabular-nums">
                {move || count_up.display_at(elapsed.get())}
            </div>

            {trend}

            // Bottom gradient bar
            <div
                class="absolute bottom-0 left-0 h-0.5 bg-gradient-to-r from-indigo-500 to-emerald-500 transition-all duration-700"
                style=move || format!("width: {}%", if shown(timeline.bottom_bar) { 100 } else { 0 })
            />
        </div>
    }
}
