//! Workshop Table Component

use leptos::*;

use craftsense::dashboard::{WorkshopRow, COLUMNS};

use crate::state::use_dashboard_state;

/// "Current Workshops" table
#[component]
pub fn WorkshopTable() -> impl IntoView {
    let state = use_dashboard_state();
    let rows = state.dashboard.with_untracked(|d| d.workshop_rows());

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {COLUMNS.into_iter().map(|column| view! {
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                {column}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {rows.into_iter().map(|row| view! { <WorkshopTableRow row=row /> }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn WorkshopTableRow(row: WorkshopRow) -> impl IntoView {
    view! {
        <tr class="hover:bg-gray-50 transition-colors">
            <td class="px-6 py-4">
                <div class="text-sm font-medium text-gray-900">{row.title}</div>
                <div class="text-xs text-gray-500">{row.completion}</div>
            </td>
            <td class="px-6 py-4 text-sm text-gray-700">{row.instructor}</td>
            <td class="px-6 py-4 text-sm text-gray-700">{row.category}</td>
            <td class="px-6 py-4">
                <div class="text-sm text-gray-900">{row.enrollments}</div>
                <div class="text-xs text-gray-500">{row.reviews}</div>
            </td>
            <td class="px-6 py-4 text-sm text-gray-900">"★ " {row.rating}</td>
            <td class="px-6 py-4">
                <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", row.status.css_class())>
                    {row.status.label()}
                </span>
            </td>
        </tr>
    }
}
