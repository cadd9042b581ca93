//! Paginated lead table with filters, delete, and worker follow-ups.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches a page on mount, on page change, and every `REFRESH_INTERVAL`
//! while mounted. Filters never refetch; they narrow the loaded page.

#[cfg(test)]
#[path = "all_leads_test.rs"]
mod all_leads_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use schema::filter::{AssignmentFilter, WorkerFilter};
use schema::format::{format_input_date, parse_input_date};
use schema::session::update_lead_path;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_screen::ErrorScreen;
use crate::components::follow_up_dialog::FollowUpDialog;
use crate::components::lead_table::LeadTable;
use crate::components::page_controls::PageControls;
use crate::state::auth::AuthState;
use crate::state::leads::LeadsState;
use crate::state::toasts::ToastState;

/// Body of the delete confirmation.
#[must_use]
pub fn delete_prompt(name: &str) -> String {
    format!("Delete lead \"{name}\"? This cannot be undone.")
}

/// Summary line above the table, e.g. `Showing 3 of 10 leads`.
#[must_use]
pub fn showing_label(visible: usize, loaded: usize) -> String {
    if visible == loaded {
        format!("Showing {loaded} leads")
    } else {
        format!("Showing {visible} of {loaded} leads")
    }
}

#[component]
pub fn AllLeadsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let leads = RwSignal::new(LeadsState::default());
    let deleting = RwSignal::new(false);

    let load = move |page: u32| {
        leads.update(|s| s.begin_load(page));
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_lead_page(page).await {
                Ok(fetched) => leads.update(|s| s.replace_page(fetched)),
                Err(e) => {
                    let message = e.toast_message("Failed to load leads.");
                    leads.update(|s| s.fail_load(message));
                }
            }
        });
    };
    let reload = move || load(leads.get_untracked().requested_page.max(1));

    Effect::new(move || load(1));

    #[cfg(feature = "hydrate")]
    {
        let timer = crate::util::refresh::spawn(schema::REFRESH_INTERVAL, reload);
        on_cleanup(move || timer.cancel());
    }

    let session = move || auth.get().session;
    let can_follow_up = Signal::derive(move || session().can_follow_up());
    let tracks_assignments = Signal::derive(move || session().tracks_assignments());
    let visible = Signal::derive(move || leads.with(LeadsState::visible));
    let pagination = Signal::derive(move || leads.with(|s| s.pagination));
    let busy = Signal::derive(move || leads.with(|s| s.loading));

    let on_edit = Callback::new(move |id: String| navigate(&update_lead_path(&id), NavigateOptions::default()));
    let on_delete = Callback::new(move |id: String| leads.update(|s| s.pending_delete = Some(id)));
    let on_follow_up = Callback::new(move |id: String| leads.update(|s| s.follow_up_target = Some(id)));

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = leads.get_untracked().pending_delete else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::delete_lead(&id).await;
            deleting.set(false);
            leads.update(|s| {
                s.finish_delete(&id, &outcome);
            });
            toasts.update(|t| {
                match &outcome {
                    Ok(()) => t.success("Lead deleted successfully!"),
                    Err(e) => t.error(e.toast_message("Failed to delete lead.")),
                };
            });
        });
    });

    let delete_dialog = move || {
        let state = leads.get();
        let id = state.pending_delete.clone()?;
        let name = state.find(&id).map_or_else(|| "this lead".to_owned(), |l| l.name.clone());
        Some(view! {
            <ConfirmDialog
                title="Delete Lead"
                message=delete_prompt(&name)
                confirm_label="Delete"
                busy=deleting
                on_cancel=Callback::new(move |()| leads.update(|s| s.pending_delete = None))
                on_confirm=confirm_delete
            />
        })
    };

    let follow_up_dialog = move || {
        let state = leads.get();
        let id = state.follow_up_target.clone()?;
        let name = state.find(&id).map(|l| l.name.clone()).unwrap_or_default();
        let close = Callback::new(move |()| leads.update(|s| s.follow_up_target = None));
        Some(view! {
            <FollowUpDialog
                lead_id=id
                lead_name=name
                on_close=close
                on_done=Callback::new(move |()| {
                    close.run(());
                    reload();
                })
            />
        })
    };

    view! {
        <Show
            when=move || !leads.with(LeadsState::is_fatal)
            fallback=move || {
                view! {
                    <ErrorScreen
                        message=Signal::derive(move || leads.get().error.unwrap_or_default())
                        on_reload=Callback::new(move |()| load(1))
                    />
                }
            }
        >
            <section class="leads-page">
                <header class="page-header">
                    <h1>"All Leads"</h1>
                    <span class="page-header__meta">
                        {move || leads.with(|s| showing_label(s.visible().len(), s.items.len()))}
                    </span>
                </header>

                <div class="filter-bar">
                    <input
                        class="filter-bar__search"
                        type="search"
                        placeholder="Search by name, position, or email"
                        prop:value=move || leads.with(|s| s.filter.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            leads.update(|s| s.filter.search = value);
                        }
                    />
                    <Show when=move || tracks_assignments.get()>
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| {
                                if let Some(choice) = AssignmentFilter::from_label(&event_target_value(&ev)) {
                                    leads.update(|s| s.filter.set_assignment(choice));
                                }
                            }
                        >
                            {AssignmentFilter::ALL
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <option
                                            value=f.label()
                                            selected=move || leads.with(|s| s.filter.assignment == f)
                                        >
                                            {f.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <select
                            class="filter-bar__select"
                            disabled=move || leads.with(|s| s.filter.assignment == AssignmentFilter::Unassigned)
                            on:change=move |ev| {
                                let choice = WorkerFilter::from_choice(&event_target_value(&ev));
                                leads.update(|s| s.filter.worker = choice);
                            }
                        >
                            {move || {
                                let state = leads.get();
                                state
                                    .worker_choices()
                                    .into_iter()
                                    .map(|name| {
                                        let selected = state.filter.worker.label() == name;
                                        view! {
                                            <option value=name.clone() selected=selected>
                                                {name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </Show>
                    <Show when=move || session().can_filter_by_follow_up_date()>
                        <input
                            class="filter-bar__date"
                            type="date"
                            prop:value=move || {
                                leads.with(|s| s.filter.follow_up_on.map(format_input_date).unwrap_or_default())
                            }
                            on:change=move |ev| {
                                let day = parse_input_date(&event_target_value(&ev)).ok();
                                leads.update(|s| s.filter.follow_up_on = day);
                            }
                        />
                    </Show>
                    <Show when=move || leads.with(|s| s.filter.is_active())>
                        <button
                            class="btn btn--ghost btn--small"
                            on:click=move |_| leads.update(|s| s.filter = schema::LeadFilter::default())
                        >
                            "Clear filters"
                        </button>
                    </Show>
                </div>

                <Show when=move || leads.with(|s| s.loading && !s.loaded)>
                    <p class="leads-page__loading">"Loading leads..."</p>
                </Show>
                <Show when=move || leads.with(|s| s.loaded && s.error.is_some())>
                    <p class="leads-page__stale">
                        {move || leads.get().error.unwrap_or_default()}
                        " Showing the last loaded page."
                    </p>
                </Show>

                <LeadTable
                    leads=visible
                    can_follow_up=can_follow_up
                    show_assignee=tracks_assignments
                    on_edit=on_edit
                    on_delete=on_delete
                    on_follow_up=on_follow_up
                />
                <PageControls pagination=pagination busy=busy on_page=Callback::new(load)/>
            </section>
            {delete_dialog}
            {follow_up_dialog}
        </Show>
    }
}
