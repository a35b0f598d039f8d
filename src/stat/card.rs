//! Stat card model
//!
//! A stat card counts from zero up to its target over a fixed duration after
//! an optional delay. All timing is expressed as elapsed time since the card
//! mounted, so the same model drives browser frames, terminal output and
//! tests.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::format::StatTarget;

/// Default count-up duration
pub const DEFAULT_COUNT_UP: Duration = Duration::from_secs(2);

/// Icon shown in the corner of a card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatIcon {
    Users,
    ShoppingBag,
    DollarSign,
    GraduationCap,
    Leaf,
}

impl StatIcon {
    /// Glyph used by text and web renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            StatIcon::Users => "👥",
            StatIcon::ShoppingBag => "🛍",
            StatIcon::DollarSign => "💲",
            StatIcon::GraduationCap => "🎓",
            StatIcon::Leaf => "🌿",
        }
    }
}

/// Month-over-month trend attached to a card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trend {
    pub percent: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn new(percent: i32) -> Self {
        Self { percent }
    }

    pub fn direction(&self) -> TrendDirection {
        match self.percent {
            p if p > 0 => TrendDirection::Up,
            p if p < 0 => TrendDirection::Down,
            _ => TrendDirection::Flat,
        }
    }

    /// `+12%`, `-3%` or `0%`
    pub fn label(&self) -> String {
        if self.percent > 0 {
            format!("+{}%", self.percent)
        } else {
            format!("{}%", self.percent)
        }
    }
}

/// Ease-out cubic: fast start, settles gently on 1.0
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Count-up animation toward a stat target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: StatTarget,
    pub duration: Duration,
    pub delay: Duration,
}

impl CountUp {
    pub fn new(target: StatTarget, duration: Duration) -> Self {
        Self {
            target,
            duration,
            delay: Duration::ZERO,
        }
    }

    /// Builder method: wait before counting
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Total time until the final value is shown
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let running = (elapsed - self.delay).as_secs_f64();
        (running / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    /// Raw animated value
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.target.value;
        }
        self.target.value * ease_out(self.progress(elapsed))
    }

    /// Animated value formatted like the target
    pub fn display_at(&self, elapsed: Duration) -> String {
        self.target.format.format(self.value_at(elapsed))
    }
}

/// Start times of the card's entrance effects, relative to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceTimeline {
    /// Card fades and slides in
    pub card: Duration,
    /// Icon springs in
    pub icon: Duration,
    /// Top accent bar sweeps across
    pub top_bar: Duration,
    /// Bottom gradient bar sweeps across
    pub bottom_bar: Duration,
    /// Trend badge slides in
    pub trend: Duration,
    /// "vs last month" caption fades in
    pub caption: Duration,
}

impl EntranceTimeline {
    pub fn for_delay(delay: Duration) -> Self {
        Self {
            card: delay,
            icon: delay + Duration::from_millis(300),
            top_bar: delay + Duration::from_millis(500),
            bottom_bar: delay + Duration::from_millis(700),
            trend: delay + Duration::from_secs(1),
            caption: delay + Duration::from_millis(1200),
        }
    }
}

/// Everything needed to render one stat card
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardSpec {
    pub label: &'static str,
    pub icon: StatIcon,
    pub target: StatTarget,
    pub trend: Option<Trend>,
    pub delay: Duration,
}

impl StatCardSpec {
    pub fn new(label: &'static str, icon: StatIcon, target: StatTarget) -> Self {
        Self {
            label,
            icon,
            target,
            trend: None,
            delay: Duration::ZERO,
        }
    }

    /// Builder method: attach a trend
    pub fn trend(mut self, percent: i32) -> Self {
        self.trend = Some(Trend::new(percent));
        self
    }

    /// Builder method: stagger the entrance
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn count_up(&self, duration: Duration) -> CountUp {
        CountUp::new(self.target, duration).delay(self.delay)
    }

    pub fn timeline(&self) -> EntranceTimeline {
        EntranceTimeline::for_delay(self.delay)
    }

    /// Trend to render, if any; a zero trend counts as absent
    pub fn visible_trend(&self) -> Option<Trend> {
        self.trend.filter(|t| t.percent != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::format::StatFormat;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_integer_reaches_target_exactly() {
        let anim = CountUp::new(StatTarget::integer(1234), DEFAULT_COUNT_UP);
        assert_eq!(anim.display_at(Duration::ZERO), "0");
        assert_eq!(anim.display_at(DEFAULT_COUNT_UP), "1234");
        assert_eq!(anim.display_at(DEFAULT_COUNT_UP * 3), "1234");
        assert!(anim.is_finished(DEFAULT_COUNT_UP));
    }

    #[test]
    fn test_currency_frames_keep_format() {
        let target = StatTarget::from_literal("$45,000").unwrap();
        let anim = CountUp::new(target, DEFAULT_COUNT_UP);

        for step in 0..=40 {
            let frame = anim.display_at(ms(step * 50));
            let body = frame.strip_prefix('$').expect("currency prefix");
            assert!(!body.is_empty());
            assert!(body.chars().all(|c| c.is_ascii_digit() || c == ','));
            assert!(!body.starts_with(','));
            assert!(!body.ends_with(','));
        }
        assert_eq!(anim.display_at(DEFAULT_COUNT_UP), "$45,000");
    }

    #[test]
    fn test_percent_frames_keep_suffix() {
        let anim = CountUp::new(StatTarget::percent(81), ms(1000));
        assert_eq!(anim.display_at(ms(0)), "0%");
        assert!(anim.display_at(ms(500)).ends_with('%'));
        assert_eq!(anim.display_at(ms(1000)), "81%");
    }

    #[test]
    fn test_delay_holds_at_zero() {
        let anim = CountUp::new(StatTarget::integer(500), ms(1000)).delay(ms(300));
        assert_eq!(anim.value_at(ms(0)), 0.0);
        assert_eq!(anim.value_at(ms(300)), 0.0);
        assert!(anim.value_at(ms(400)) > 0.0);
        assert!(!anim.is_finished(ms(1000)));
        assert_eq!(anim.value_at(ms(1300)), 500.0);
    }

    #[test]
    fn test_values_are_monotonic() {
        let anim = CountUp::new(StatTarget::integer(1000), ms(2000));
        let mut last = 0.0;
        for step in 0..=100 {
            let value = anim.value_at(ms(step * 20));
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let anim = CountUp::new(StatTarget::integer(42), Duration::ZERO);
        assert_eq!(anim.display_at(ms(1)), "42");
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_trend_labels() {
        assert_eq!(Trend::new(12).label(), "+12%");
        assert_eq!(Trend::new(-3).label(), "-3%");
        assert_eq!(Trend::new(0).label(), "0%");
        assert_eq!(Trend::new(5).direction(), TrendDirection::Up);
        assert_eq!(Trend::new(-5).direction(), TrendDirection::Down);
        assert_eq!(Trend::new(0).direction(), TrendDirection::Flat);
    }

    #[test]
    fn test_card_spec_builders() {
        let card = StatCardSpec::new("Total Sales", StatIcon::ShoppingBag, StatTarget::integer(10))
            .trend(8)
            .delay(ms(200));

        assert_eq!(card.trend, Some(Trend::new(8)));
        assert_eq!(card.count_up(ms(1000)).total(), ms(1200));
        assert_eq!(card.timeline().trend, ms(1200));
        assert_eq!(card.target.format, StatFormat::Integer);
    }

    #[test]
    fn test_trend_only_visible_when_nonzero() {
        let plain = StatCardSpec::new("Active Workshops", StatIcon::GraduationCap, StatTarget::integer(40));
        assert_eq!(plain.visible_trend(), None);
        assert_eq!(plain.clone().trend(0).visible_trend(), None);
        assert_eq!(plain.clone().trend(-4).visible_trend(), Some(Trend::new(-4)));
        assert_eq!(plain.trend(12).visible_trend().map(|t| t.label()), Some("+12%".to_string()));
    }
}
