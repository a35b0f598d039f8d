//! Header Component
//!
//! Title bar with the section tabs.

use leptos::*;

use craftsense::dashboard::{Tab, TITLE};

use crate::state::use_dashboard_state;

/// Page header with tab buttons
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🧶"</span>
                        <span class="text-xl font-bold text-gray-900">{TITLE}</span>
                    </div>

                    <div class="flex items-center space-x-1">
                        {Tab::ALL.into_iter().map(|tab| view! { <TabButton tab=tab /> }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let state = use_dashboard_state();
    let is_active = create_memo(move |_| state.active_tab() == tab);

    view! {
        <button
            on:click=move |_| state.select(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-indigo-600 text-white", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900 hover:bg-gray-100", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}
