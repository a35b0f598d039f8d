//! Workshops Page
//!
//! Workshop creation form beside the table of generated workshops.

use leptos::*;

use crate::components::{WorkshopFormView, WorkshopTable};

/// Workshops tab
#[component]
pub fn Workshops() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <section class="bg-white rounded-xl p-6 shadow-sm">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">"Create Workshop"</h2>
                <WorkshopFormView />
            </section>

            <section class="lg:col-span-2 bg-white rounded-xl p-6 shadow-sm">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">"Current Workshops"</h2>
                <WorkshopTable />
            </section>
        </div>
    }
}
