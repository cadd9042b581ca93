//! Manager dialog for assigning unassigned leads to a worker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads categories, workers, and the first page of leads when opened; only
//! unassigned leads are offered. Submits one `AssignLeadsRequest`.

#[cfg(test)]
#[path = "new_assignment_dialog_test.rs"]
mod new_assignment_dialog_test;

use leptos::prelude::*;
use schema::assignment::AssignLeadsRequest;
use schema::{Category, FormErrors, Lead, Priority, Worker};

use crate::components::field_error::FieldError;
use crate::state::toasts::ToastState;

/// One selectable row in the lead picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadChoice {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl LeadChoice {
    #[must_use]
    pub fn from_lead(lead: Lead) -> Self {
        let category = lead.category_title().to_owned();
        Self { id: lead.id, name: lead.name, category }
    }
}

/// Leads the dialog offers: unassigned ones, in listing order.
#[must_use]
pub fn lead_choices(leads: Vec<Lead>) -> Vec<LeadChoice> {
    leads.into_iter().filter(|l| !l.is_assigned()).map(LeadChoice::from_lead).collect()
}

#[component]
pub fn NewAssignmentDialog(on_close: Callback<()>, on_assigned: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let request = RwSignal::new(AssignLeadsRequest::default());
    let errors = RwSignal::new(FormErrors::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let workers = RwSignal::new(Vec::<Worker>::new());
    let leads = RwSignal::new(Vec::<LeadChoice>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        let (cats, crew, page) = (
            crate::net::api::fetch_categories().await,
            crate::net::api::fetch_workers().await,
            crate::net::api::fetch_lead_page(1).await,
        );
        match (cats, crew, page) {
            (Ok(cats), Ok(crew), Ok(page)) => {
                categories.set(cats);
                workers.set(crew);
                leads.set(lead_choices(page.leads));
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                toasts.update(|t| {
                    t.error(e.toast_message("Failed to load assignment data"));
                });
            }
        }
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = request.get();
        if let Err(e) = body.validate() {
            errors.set(e);
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::assign_leads(&body).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Assignment created successfully!");
                    });
                    on_assigned.run(());
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.error(e.toast_message("Failed to assign leads"));
                    });
                }
            }
            busy.set(false);
        });
    };

    let field_error = move |field: &'static str| errors.get().get(field).map(ToOwned::to_owned);
    let set_field = move |field: &'static str, apply: &dyn Fn(&mut AssignLeadsRequest)| {
        request.update(|r| apply(r));
        errors.update(|e| e.clear(field));
    };

    let lead_options = move || {
        leads
            .get()
            .into_iter()
            .map(|choice| {
                let LeadChoice { id, name, category } = choice;
                let checked_id = id.clone();
                view! {
                    <label class="assign-dialog__lead">
                        <input
                            type="checkbox"
                            prop:checked=move || request.get().lead_ids.contains(&checked_id)
                            on:change=move |_| set_field("leads", &|r| r.toggle_lead(&id))
                        />
                        <span>{name}</span>
                        <span class="assign-dialog__lead-sub">{category}</span>
                    </label>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog dialog--assign" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="dialog__title">"New Assignment"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_field("category", &|r| r.category.clone_from(&value));
                            }
                        >
                            <option value="">"Select category"</option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id>{c.title}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <FieldError message=Signal::derive(move || field_error("category"))/>

                    <label class="dialog__label">
                        "Worker"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_field("worker", &|r| r.worker_id.clone_from(&value));
                            }
                        >
                            <option value="">"Select worker"</option>
                            {move || {
                                workers
                                    .get()
                                    .into_iter()
                                    .map(|w| view! { <option value=w.id>{w.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <FieldError message=Signal::derive(move || field_error("worker"))/>

                    <label class="dialog__label">
                        "Priority"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                if let Ok(p) = event_target_value(&ev).parse::<Priority>() {
                                    request.update(|r| r.priority = p);
                                }
                            }
                        >
                            {Priority::ALL
                                .into_iter()
                                .map(|p| {
                                    view! {
                                        <option value=p.as_str() selected=move || request.get().priority == p>
                                            {p.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Due date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || request.get().due_date
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_field("dueDate", &|r| r.due_date.clone_from(&value));
                            }
                        />
                    </label>
                    <FieldError message=Signal::derive(move || field_error("dueDate"))/>

                    <fieldset class="assign-dialog__leads">
                        <legend>{move || format!("Leads ({} selected)", request.get().lead_ids.len())}</legend>
                        <Show
                            when=move || !leads.get().is_empty()
                            fallback=|| view! { <p>"No unassigned leads."</p> }
                        >
                            {lead_options}
                        </Show>
                    </fieldset>
                    <FieldError message=Signal::derive(move || field_error("leads"))/>

                    <label class="dialog__label">
                        "Notes"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || request.get().notes
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                request.update(|r| r.notes = value);
                            }
                        ></textarea>
                    </label>
                </Show>

                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get() || loading.get()>
                        {move || if busy.get() { "Assigning..." } else { "Assign" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
