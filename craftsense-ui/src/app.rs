//! App Root Component
//!
//! Provides the dashboard state and switches between the two tabs.

use leptos::*;

use craftsense::dashboard::Tab;

use crate::components::{Header, Toaster};
use crate::pages::{Overview, Workshops};
use crate::state::{provide_dashboard_state, use_dashboard_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();
    let state = use_dashboard_state();
    let active_tab = create_memo(move |_| state.active_tab());

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match active_tab.get() {
                    Tab::Overview => view! { <Overview /> }.into_view(),
                    Tab::Workshops => view! { <Workshops /> }.into_view(),
                }}
            </main>

            <Toaster />
        </div>
    }
}
