//! Single-lead creation form.

use leptos::prelude::*;
use schema::validate::{FormMode, LeadForm};
use schema::{Category, FormErrors};

use crate::components::field_error::FieldError;
use crate::components::lead_form_fields::LeadFormFields;
use crate::state::toasts::ToastState;
use crate::util::file::PickedFile;

/// How long the success banner stays before the form resets.
pub const SUCCESS_RESET_MS: u32 = 3_000;

/// Load categories into `categories`, recording a failure under the
/// `categories` error key.
pub(crate) fn load_categories(categories: RwSignal<Vec<Category>>, errors: RwSignal<FormErrors>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => {
                log_failure("categories", &e);
                errors.update(|errs| errs.insert("categories", "Failed to load categories. Please refresh the page."));
            }
        }
    });
}

/// Run `after` once the success banner has been visible long enough.
pub(crate) fn after_success_delay(after: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SUCCESS_RESET_MS))).await;
        after();
    });
    #[cfg(not(feature = "hydrate"))]
    after();
}

#[allow(unused_variables)]
fn log_failure(what: &str, err: &schema::ApiError) {
    #[cfg(feature = "hydrate")]
    log::warn!("failed to load {what}: {err}");
}

#[component]
pub fn AddLeadPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(LeadForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let document = RwSignal::new_local(None::<PickedFile>);
    let document_error = RwSignal::new(None::<String>);
    let follow_up_text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

    Effect::new(move || load_categories(categories, errors));

    let reset = move || {
        form.set(LeadForm::default());
        errors.set(FormErrors::new());
        document.set(None);
        document_error.set(None);
        success.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || success.get() {
            return;
        }
        let current = form.get();
        if let Err(found) = current.validate(FormMode::Create) {
            errors.set(found);
            return;
        }
        if document_error.get().is_some() {
            return;
        }
        busy.set(true);
        let picked = document.get();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_lead(&current, picked.as_ref()).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    success.set(true);
                    toasts.update(|t| {
                        t.success("Lead saved successfully!");
                    });
                    after_success_delay(reset);
                }
                Err(e) => {
                    let message = e.toast_message("Failed to save lead. Please try again.");
                    errors.update(|errs| errs.insert("submit", message));
                }
            }
        });
    };

    let error_for = move |key: &'static str| Signal::derive(move || errors.get().get(key).map(ToOwned::to_owned));

    view! {
        <section class="lead-form-page">
            <header class="page-header">
                <h1>"Add Lead"</h1>
                <p class="page-header__meta">"Capture a new prospect and file it under a category."</p>
            </header>
            <form class="lead-form" class:lead-form--success=move || success.get() on:submit=on_submit>
                <Show when=move || success.get()>
                    <div class="lead-form__banner">"Lead saved successfully!"</div>
                </Show>
                <FieldError message=error_for("categories")/>
                <LeadFormFields
                    form=form
                    errors=errors
                    categories=categories
                    mode=FormMode::Create
                    document=document
                    document_error=document_error
                    follow_up_text=follow_up_text
                />
                <FieldError message=error_for("submit")/>
                <div class="lead-form__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| reset()>
                        "Reset"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get() || success.get()>
                        {move || {
                            if busy.get() {
                                "Saving..."
                            } else if success.get() {
                                "Saved"
                            } else {
                                "Save Lead"
                            }
                        }}
                    </button>
                </div>
            </form>
        </section>
    }
}
