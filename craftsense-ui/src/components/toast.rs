//! Toast Notification Component
//!
//! Shows loading and success messages from the workshop form.

use leptos::*;

use craftsense::form::{Notification, NotificationKind};

use crate::state::use_dashboard_state;

/// Toast notification container
#[component]
pub fn Toaster() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            <For
                each=move || state.toasts.get()
                key=|toast| (toast.id, toast.is_loading())
                children=move |toast| view! { <ToastMessage toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(toast: Notification) -> impl IntoView {
    let (icon, bg_class) = match toast.kind {
        NotificationKind::Loading => (view! { <div class="loading-spinner w-4 h-4" /> }.into_view(), "bg-gray-700"),
        NotificationKind::Success => ("✓".into_view(), "bg-green-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{toast.message}</span>
        </div>
    }
}
