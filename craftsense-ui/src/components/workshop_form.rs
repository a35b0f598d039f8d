//! Workshop Form Component
//!
//! Create or update a workshop. Submission is simulated: after the configured
//! delay the draft is logged to the browser console and a success toast
//! replaces the loading one.

use gloo_timers::callback::Timeout;
use leptos::*;

use craftsense::data::{Workshop, WorkshopDraft};
use craftsense::form::{FormField, InputKind, PendingSubmission, WorkshopForm, WorkshopSink};

use crate::state::{use_dashboard_state, DashboardState};

/// Logs resolved drafts to the browser console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl WorkshopSink for ConsoleSink {
    fn accept(&self, draft: WorkshopDraft) {
        match serde_json::to_string(&draft) {
            Ok(json) => web_sys::console::log_2(&"Workshop submitted".into(), &json.into()),
            Err(e) => web_sys::console::warn_1(&format!("Workshop submitted: {}", e).into()),
        }
    }
}

/// Workshop form component
#[component]
pub fn WorkshopFormView(
    /// Existing workshop to edit; a blank create form otherwise
    #[prop(optional)]
    workshop: Option<Workshop>,
) -> impl IntoView {
    let state = use_dashboard_state();

    let form = create_rw_signal(workshop.as_ref().map(WorkshopForm::edit).unwrap_or_default());
    let error = create_rw_signal(None::<String>);

    // Dropping a gloo Timeout cancels it, so unmounting the form abandons any
    // submission still waiting on its delay.
    let pending_timer = store_value(None::<Timeout>);
    on_cleanup(move || pending_timer.set_value(None));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.submit()) {
            Some(Ok(pending)) => {
                error.set(None);
                state.notify(pending.notification.clone());

                let delay = state.form.get_value().submit_delay_ms as u32;
                let timer = Timeout::new(delay, move || finish_submission(state, form, pending));
                pending_timer.set_value(Some(timer));
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <form on:submit=on_submit class="space-y-4">
            {FormField::ALL.into_iter().map(|field| view! { <FieldInput form=form field=field /> }).collect_view()}

            <PaidToggle form=form />

            {move || error.get().map(|message| view! {
                <p class="text-sm text-red-600">{message}</p>
            })}

            <button
                type="submit"
                disabled=submitting
                class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                       disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Processing..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>{form.with(|f| f.mode().submit_label())}</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

fn finish_submission(
    state: DashboardState,
    form: RwSignal<WorkshopForm>,
    pending: PendingSubmission,
) {
    match form.try_update(|f| f.resolve(pending)) {
        Some(Ok(resolution)) => {
            ConsoleSink.accept(resolution.draft);
            let toast_duration = state.form.get_value().toast_duration();
            state.notify(resolution.notification.with_duration(toast_duration));
        }
        Some(Err(e)) => web_sys::console::warn_1(&format!("Submission could not resolve: {}", e).into()),
        None => {}
    }
}

#[component]
fn FieldInput(form: RwSignal<WorkshopForm>, field: FormField) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |ev: web_sys::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let on_focus = move |_: web_sys::FocusEvent| form.update(|f| f.focus(field));
    let on_blur = move |_: web_sys::FocusEvent| form.update(|f| f.blur());

    let class = move || {
        let base = "w-full rounded-lg px-4 py-3 text-gray-900 border focus:outline-none transition-colors";
        if form.with(|f| f.focused() == Some(field)) {
            format!("{} border-indigo-500 ring-2 ring-indigo-100", base)
        } else {
            format!("{} border-gray-300", base)
        }
    };

    let input = match field.input_kind() {
        InputKind::TextArea => view! {
            <textarea
                rows="3"
                required=field.is_required()
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
                class=class
            />
        }
        .into_view(),
        kind => view! {
            <input
                type=kind.html_type()
                required=field.is_required()
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
                class=class
            />
        }
        .into_view(),
    };

    view! {
        <div>
            <label class="block text-sm text-gray-600 mb-2">
                {field.label()}
                {field.is_required().then_some(" *")}
            </label>
            {input}
        </div>
    }
}

#[component]
fn PaidToggle(form: RwSignal<WorkshopForm>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <label class="flex items-center space-x-2 text-sm text-gray-700">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.draft().is_paid)
                    on:change=move |ev| form.update(|f| f.set_paid(event_target_checked(&ev)))
                />
                <span>"Paid workshop"</span>
            </label>

            {move || form.with(|f| f.price_visible()).then(|| view! {
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Price ($)"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.with(|f| f.draft().price.to_string())
                        on:input=move |ev| {
                            let price = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.set_price(price));
                        }
                        class="w-full rounded-lg px-4 py-3 text-gray-900 border border-gray-300 focus:outline-none"
                    />
                </div>
            })}
        </div>
    }
}
