//! Chart datasets
//!
//! Renderer-agnostic shapes for the three overview charts. Renderers (canvas,
//! terminal) only scale and draw; every derived number lives here.

use std::f64::consts::TAU;

use crate::data::{RegionShare, RevenueData, SalesData};

/// Series colors, cycled by index
pub const PALETTE: [&str; 4] = ["#4F46E5", "#10B981", "#F59E0B", "#EF4444"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One labelled value on a line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
}

/// Single-series line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub title: &'static str,
    pub series: &'static str,
    pub color: &'static str,
    pub points: Vec<LinePoint>,
}

impl LineSeries {
    pub fn revenue(data: &[RevenueData]) -> Self {
        Self {
            title: "Revenue Trend",
            series: "revenue",
            color: PALETTE[0],
            points: data
                .iter()
                .map(|r| LinePoint {
                    label: r.month.clone(),
                    value: f64::from(r.revenue),
                })
                .collect(),
        }
    }

    /// (min, max) of the values, `None` when empty
    pub fn bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|p| p.value))
    }
}

/// One wedge of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: u32,
    pub color: &'static str,
    /// Radians, measured clockwise from 12 o'clock
    pub start_angle: f64,
    pub sweep: f64,
}

impl PieSlice {
    /// `"Europe: 27%"`
    pub fn label(&self) -> String {
        format!("{}: {}%", self.name, self.value)
    }

    /// Angle through the middle of the wedge
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Wedges sized by each share's fraction of the actual total
    ///
    /// Normalized shares can sum to 99 or 101; sweeps are computed against the
    /// real sum so the pie always closes.
    pub fn regional(shares: &[RegionShare]) -> Self {
        let total: u32 = shares.iter().map(|s| s.value).sum();
        let mut angle = 0.0;

        let slices = shares
            .iter()
            .enumerate()
            .map(|(i, share)| {
                let sweep = if total == 0 {
                    0.0
                } else {
                    f64::from(share.value) / f64::from(total) * TAU
                };
                let slice = PieSlice {
                    name: share.name.clone(),
                    value: share.value,
                    color: palette_color(i),
                    start_angle: angle,
                    sweep,
                };
                angle += sweep;
                slice
            })
            .collect();

        Self {
            title: "Regional Distribution",
            slices,
        }
    }
}

/// One x-axis group on a grouped bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    /// One value per series, in series order
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub series: Vec<BarSeries>,
    pub groups: Vec<BarGroup>,
}

impl BarChart {
    /// Sales count and revenue per product
    pub fn product_performance(data: &[SalesData]) -> Self {
        Self {
            title: "Product Performance",
            series: vec![
                BarSeries {
                    name: "sales",
                    color: PALETTE[0],
                },
                BarSeries {
                    name: "revenue",
                    color: PALETTE[1],
                },
            ],
            groups: data
                .iter()
                .map(|s| BarGroup {
                    label: s.product_name.clone(),
                    values: vec![f64::from(s.sales), f64::from(s.revenue)],
                })
                .collect(),
        }
    }

    /// Largest value across all groups, used for the y-axis
    pub fn max_value(&self) -> f64 {
        self.groups
            .iter()
            .flat_map(|g| g.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Round `max` up to a friendly axis ceiling (1, 2, 2.5 or 5 times a power of ten)
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }

    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);

    step * magnitude
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_data;

    #[test]
    fn test_revenue_series() {
        let data = sample_data();
        let line = LineSeries::revenue(&data.revenue);
        assert_eq!(line.title, "Revenue Trend");
        assert_eq!(line.points.len(), 3);
        assert_eq!(line.points[0].label, "Jan");
        assert_eq!(line.bounds(), Some((20000.0, 50000.0)));
    }

    #[test]
    fn test_empty_series_has_no_bounds() {
        assert_eq!(LineSeries::revenue(&[]).bounds(), None);
    }

    #[test]
    fn test_pie_closes() {
        let shares = vec![
            RegionShare::new("North America", 36),
            RegionShare::new("Europe", 27),
            RegionShare::new("Asia", 21),
            RegionShare::new("Others", 17),
        ];
        let pie = PieChart::regional(&shares);

        let total_sweep: f64 = pie.slices.iter().map(|s| s.sweep).sum();
        assert!((total_sweep - TAU).abs() < 1e-9);
        assert_eq!(pie.slices[1].start_angle, pie.slices[0].sweep);
        assert_eq!(pie.slices[0].label(), "North America: 36%");
        assert_eq!(pie.slices[3].color, "#EF4444");
    }

    #[test]
    fn test_pie_zero_total() {
        let pie = PieChart::regional(&[RegionShare::new("a", 0)]);
        assert_eq!(pie.slices[0].sweep, 0.0);
    }

    #[test]
    fn test_product_bars() {
        let data = sample_data();
        let bars = BarChart::product_performance(&data.sales);
        assert_eq!(bars.series.len(), 2);
        assert_eq!(bars.groups[0].label, "Ceramic Vase");
        assert_eq!(bars.groups[0].values, vec![120.0, 6000.0]);
        assert_eq!(bars.max_value(), 6000.0);
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(18.0), 20.0);
        assert_eq!(nice_ceiling(23000.0), 25000.0);
        assert_eq!(nice_ceiling(41000.0), 50000.0);
        assert_eq!(nice_ceiling(80000.0), 100000.0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(4));
    }
}
