//! Edit form for an existing lead, addressed by `/leads/update-leads/:id`.

#[cfg(test)]
#[path = "update_lead_test.rs"]
mod update_lead_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use schema::validate::{FormMode, LeadForm, format_follow_up_list, parse_follow_up_list};
use schema::{Category, FormErrors};

use crate::components::field_error::FieldError;
use crate::components::lead_form_fields::LeadFormFields;
use crate::pages::add_lead::{after_success_delay, load_categories};
use crate::state::toasts::ToastState;
use crate::util::file::PickedFile;

/// Fold the raw follow-up input into `form` and validate the result.
///
/// # Errors
///
/// Returns the field errors to display; an unparsable follow-up list is
/// reported under `followUpDates` alongside any other failures.
pub fn prepare_update(form: &LeadForm, follow_up_text: &str) -> Result<LeadForm, FormErrors> {
    let mut prepared = form.clone();
    let mut errors = match prepared.validate(FormMode::Update) {
        Ok(()) => FormErrors::new(),
        Err(found) => found,
    };
    match parse_follow_up_list(follow_up_text) {
        Ok(dates) => prepared.follow_up_dates = dates,
        Err(e) => errors.insert("followUpDates", e.to_string()),
    }
    if errors.is_empty() { Ok(prepared) } else { Err(errors) }
}

#[component]
pub fn UpdateLeadPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let lead_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let form = RwSignal::new(LeadForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let document = RwSignal::new_local(None::<PickedFile>);
    let document_error = RwSignal::new(None::<String>);
    let follow_up_text = RwSignal::new(String::new());
    let fetching = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

    Effect::new(move || {
        let id = lead_id();
        if id.is_empty() {
            fetching.set(false);
            errors.update(|e| e.insert("submit", "No lead ID provided"));
            return;
        }
        fetching.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_lead(&id).await {
                Ok(lead) => {
                    follow_up_text.set(format_follow_up_list(&lead.follow_up_dates));
                    form.set(LeadForm::from_lead(&lead));
                    document.set(None);
                }
                Err(e) => {
                    let message = e.toast_message("Failed to fetch lead data");
                    errors.update(|errs| errs.insert("submit", message));
                }
            }
            fetching.set(false);
        });
    });
    Effect::new(move || load_categories(categories, errors));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || success.get() || document_error.get().is_some() {
            return;
        }
        let prepared = match prepare_update(&form.get(), &follow_up_text.get()) {
            Ok(prepared) => prepared,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        let id = lead_id();
        let picked = document.get();
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_lead(&id, &prepared, picked.as_ref()).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    form.set(prepared);
                    success.set(true);
                    toasts.update(|t| {
                        t.success("Lead updated successfully!");
                    });
                    after_success_delay(move || success.set(false));
                }
                Err(e) => {
                    let message = e.toast_message("Failed to update lead. Please try again.");
                    errors.update(|errs| errs.insert("submit", message));
                }
            }
        });
    };

    let error_for = move |key: &'static str| Signal::derive(move || errors.get().get(key).map(ToOwned::to_owned));

    view! {
        <section class="lead-form-page">
            <header class="page-header">
                <h1>"Update Lead"</h1>
                <p class="page-header__meta">"Edit details, log contact, and reschedule follow-ups."</p>
            </header>
            <Show
                when=move || !fetching.get()
                fallback=|| view! { <p class="lead-form-page__loading">"Loading lead..."</p> }
            >
                <form class="lead-form" class:lead-form--success=move || success.get() on:submit=on_submit>
                    <Show when=move || success.get()>
                        <div class="lead-form__banner">"Lead updated successfully!"</div>
                    </Show>
                    <FieldError message=error_for("categories")/>
                    <LeadFormFields
                        form=form
                        errors=errors
                        categories=categories
                        mode=FormMode::Update
                        document=document
                        document_error=document_error
                        follow_up_text=follow_up_text
                    />
                    <FieldError message=error_for("submit")/>
                    <div class="lead-form__actions">
                        <a class="btn btn--ghost" href=schema::session::ALL_LEADS_PATH>
                            "Back to leads"
                        </a>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get() || success.get()>
                            {move || {
                                if busy.get() {
                                    "Updating..."
                                } else if success.get() {
                                    "Updated"
                                } else {
                                    "Update Lead"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
