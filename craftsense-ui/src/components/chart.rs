//! Chart Components
//!
//! Revenue, regional and product charts drawn on HTML5 Canvas from the
//! datasets the dashboard core prepares.

use leptos::*;
use std::f64::consts::FRAC_PI_2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use craftsense::dashboard::{nice_ceiling, BarChart, LineSeries, PieChart};

const GRID_COLOR: &str = "#e5e7eb"; // gray-200
const LABEL_COLOR: &str = "#6b7280"; // gray-500
const BACKGROUND: &str = "#ffffff";

/// Plot area inside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let (margin_left, margin_right, margin_top, margin_bottom) = (60.0, 20.0, 20.0, 40.0);
        Self {
            left: margin_left,
            top: margin_top,
            width: (canvas_width - margin_left - margin_right).max(0.0),
            height: (canvas_height - margin_top - margin_bottom).max(0.0),
        }
    }

    /// Canvas y for `value` on an axis running from 0 to `ceiling`
    fn y(&self, value: f64, ceiling: f64) -> f64 {
        self.top + (1.0 - value / ceiling) * self.height
    }

    /// Center x of slot `index` out of `count` equal slots
    fn slot_x(&self, index: usize, count: usize) -> f64 {
        let slot = self.width / count.max(1) as f64;
        self.left + slot * (index as f64 + 0.5)
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Revenue trend line chart
#[component]
pub fn LineChartView(series: LineSeries) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &series);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="800" height="320" class="w-full h-64 rounded-lg" />
    }
}

/// Regional distribution pie chart
#[component]
pub fn PieChartView(chart: PieChart) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = chart.slices.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &chart);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="400" height="320" class="w-full h-64 rounded-lg" />
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {legend.into_iter().map(|slice| view! {
                    <LegendEntry color=slice.color label=slice.label() />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Product performance grouped bar chart
#[component]
pub fn BarChartView(chart: BarChart) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = chart.series.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &chart);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="800" height="320" class="w-full h-64 rounded-lg" />
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {legend.into_iter().map(|series| view! {
                    <LegendEntry color=series.color label=series.name.to_string() />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn LegendEntry(color: &'static str, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-sm text-gray-600 capitalize">{label}</span>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Horizontal grid lines with y-axis labels
fn draw_grid(ctx: &CanvasRenderingContext2d, plot: &Plot, ceiling: f64, canvas_width: f64) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let value = ceiling * f64::from(5 - i) / 5.0;
        let y = plot.y(value, ceiling);
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(canvas_width - 20.0, y);
        ctx.stroke();

        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }
}

fn draw_empty(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
}

fn draw_line_chart(canvas: &HtmlCanvasElement, series: &LineSeries) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    clear(&ctx, width, height);

    let Some((_, max)) = series.bounds() else {
        draw_empty(&ctx, width, height);
        return;
    };

    let plot = Plot::new(width, height);
    let ceiling = nice_ceiling(max);
    draw_grid(&ctx, &plot, ceiling, width);

    let count = series.points.len();
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (plot.slot_x(i, count), plot.y(p.value, ceiling)))
        .collect();

    ctx.set_stroke_style(&series.color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&series.color.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // Month labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (point, (x, _)) in series.points.iter().zip(&points) {
        let _ = ctx.fill_text(&point.label, x - 12.0, height - 10.0);
    }
}

fn draw_pie_chart(canvas: &HtmlCanvasElement, chart: &PieChart) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    clear(&ctx, width, height);

    if chart.slices.iter().all(|s| s.sweep == 0.0) {
        draw_empty(&ctx, width, height);
        return;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 10.0;

    for slice in &chart.slices {
        // Slice angles start at 12 o'clock; canvas angles start at 3 o'clock
        let start = slice.start_angle - FRAC_PI_2;
        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + slice.sweep);
        ctx.close_path();
        ctx.fill();
    }

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.set_font("bold 12px sans-serif");
    for slice in chart.slices.iter().filter(|s| s.sweep > 0.3) {
        let angle = slice.mid_angle() - FRAC_PI_2;
        let x = cx + angle.cos() * radius * 0.65;
        let y = cy + angle.sin() * radius * 0.65;
        let _ = ctx.fill_text(&format!("{}%", slice.value), x - 10.0, y + 4.0);
    }
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, chart: &BarChart) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    clear(&ctx, width, height);

    if chart.groups.is_empty() {
        draw_empty(&ctx, width, height);
        return;
    }

    let plot = Plot::new(width, height);
    let ceiling = nice_ceiling(chart.max_value());
    draw_grid(&ctx, &plot, ceiling, width);

    let groups = chart.groups.len();
    let series = chart.series.len().max(1);
    let slot = plot.width / groups as f64;
    let bar_width = slot * 0.8 / series as f64;

    for (g, group) in chart.groups.iter().enumerate() {
        let group_left = plot.slot_x(g, groups) - slot * 0.4;

        for (s, value) in group.values.iter().enumerate() {
            let color = chart.series.get(s).map(|series| series.color).unwrap_or(LABEL_COLOR);
            let top = plot.y(*value, ceiling);
            ctx.set_fill_style(&color.into());
            ctx.fill_rect(group_left + bar_width * s as f64, top, bar_width - 2.0, plot.bottom() - top);
        }

        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("11px sans-serif");
        let label: String = group.label.chars().take(14).collect();
        let _ = ctx.fill_text(&label, group_left, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_scaling() {
        let plot = Plot::new(800.0, 320.0);
        assert_eq!(plot.width, 720.0);
        assert_eq!(plot.height, 260.0);
        assert_eq!(plot.y(0.0, 100.0), plot.bottom());
        assert_eq!(plot.y(100.0, 100.0), plot.top);
    }

    #[test]
    fn test_slots_are_centered() {
        let plot = Plot::new(800.0, 320.0);
        assert_eq!(plot.slot_x(0, 2), 60.0 + 180.0);
        assert_eq!(plot.slot_x(1, 2), 60.0 + 540.0);
    }

    #[test]
    fn test_tiny_canvas_does_not_go_negative() {
        let plot = Plot::new(10.0, 10.0);
        assert_eq!(plot.width, 0.0);
        assert_eq!(plot.height, 0.0);
    }
}
