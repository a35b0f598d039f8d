//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::sync::Arc;

use craftsense::config::{AnimationConfig, Config, FormConfig};
use craftsense::dashboard::{Dashboard, Tab};
use craftsense::data::{DashboardData, MockGenerator};
use craftsense::form::{upsert, Notification, NotificationId};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Generated dataset plus the active tab
    pub dashboard: RwSignal<Dashboard>,
    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<Notification>>,
    pub animation: StoredValue<AnimationConfig>,
    pub form: StoredValue<FormConfig>,
}

impl DashboardState {
    /// Generate this page load's dataset
    pub fn new(config: &Config) -> Self {
        let data = MockGenerator::with_seed(config.mock.seed)
            .generate(&config.mock, chrono::Utc::now());
        Self::with_data(data, config)
    }

    pub fn with_data(data: DashboardData, config: &Config) -> Self {
        Self {
            dashboard: create_rw_signal(Dashboard::new(Arc::new(data))),
            toasts: create_rw_signal(Vec::new()),
            animation: store_value(config.animation.clone()),
            form: store_value(config.form.clone()),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.dashboard.with(|d| d.active_tab())
    }

    pub fn select(&self, tab: Tab) {
        self.dashboard.update(|d| d.select(tab));
    }

    /// Show a toast, replacing any toast with the same id
    ///
    /// Toasts that carry a duration dismiss themselves once it elapses.
    pub fn notify(&self, notification: Notification) {
        let id = notification.id;
        let dismiss_after = dismiss_delay_ms(&notification);

        self.toasts.update(|toasts| upsert(toasts, notification));

        if let Some(millis) = dismiss_after {
            let state = *self;
            gloo_timers::callback::Timeout::new(millis, move || state.dismiss(id)).forget();
        }
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

fn dismiss_delay_ms(notification: &Notification) -> Option<u32> {
    notification
        .duration
        .map(|d| u32::try_from(d.as_millis()).unwrap_or(u32::MAX))
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new(&Config::default()));
}

pub fn use_dashboard_state() -> DashboardState {
    expect_context::<DashboardState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftsense::config::MockConfig;
    use std::time::Duration;

    fn state() -> DashboardState {
        let config = Config {
            mock: MockConfig {
                seed: Some(3),
                ..MockConfig::default()
            },
            ..Config::default()
        };
        DashboardState::new(&config)
    }

    #[test]
    fn test_tab_switch_keeps_data() {
        let runtime = create_runtime();
        let state = state();
        let before = state.dashboard.with(|d| Arc::clone(d.data()));

        state.select(Tab::Workshops);
        assert_eq!(state.active_tab(), Tab::Workshops);
        state.select(Tab::Overview);

        assert!(state.dashboard.with(|d| Arc::ptr_eq(d.data(), &before)));
        runtime.dispose();
    }

    #[test]
    fn test_dismiss_delay_follows_notification() {
        let loading = Notification::loading("Processing your request...");
        assert_eq!(dismiss_delay_ms(&loading), None);

        let done = Notification::success(loading.id, "Workshop created successfully!")
            .with_duration(Duration::from_millis(1500));
        assert_eq!(dismiss_delay_ms(&done), Some(1500));
    }

    #[test]
    fn test_loading_toast_replaced_in_place() {
        let runtime = create_runtime();
        let state = state();

        let first = Notification::loading("Processing your request...");
        let second = Notification::loading("Still working");
        state.notify(first.clone());
        state.notify(second.clone());

        let mut replacement = first.clone();
        replacement.message = "Almost done".to_string();
        state.notify(replacement);

        let messages: Vec<String> = state.toasts.with(|t| t.iter().map(|n| n.message.clone()).collect());
        assert_eq!(messages, vec!["Almost done".to_string(), "Still working".to_string()]);

        state.dismiss(second.id);
        assert_eq!(state.toasts.with(|t| t.len()), 1);
        runtime.dispose();
    }
}
