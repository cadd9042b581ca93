//! Manager assignment board.
//!
//! Rows are derived by grouping the assigned leads of the first page by
//! category and worker; the "New Assignment" dialog posts to the backend and
//! the board refetches afterwards.

use leptos::prelude::*;
use schema::dashboard::assignment_badge_class;
use schema::format::format_day_month_year;
use schema::{Assignment, AssignmentSummary};

use crate::components::badge::{Badge, PriorityBadge};
use crate::components::new_assignment_dialog::NewAssignmentDialog;
use crate::state::toasts::ToastState;
use crate::util::clock;

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let rows = RwSignal::new(Vec::<Assignment>::new());
    let loading = RwSignal::new(true);
    let dialog_open = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_lead_page(1).await {
                Ok(page) => rows.set(Assignment::group_leads(&page.leads)),
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Failed to load assignments."));
                }),
            }
            loading.set(false);
        });
    };
    Effect::new(move || load());

    let summary = Signal::derive(move || AssignmentSummary::tally(&rows.get(), clock::today()));

    let stat = move |label: &'static str, pick: fn(AssignmentSummary) -> usize| {
        view! {
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || pick(summary.get())}</span>
            </div>
        }
    };

    view! {
        <section class="assignments-page">
            <header class="page-header">
                <h1>"Assignments"</h1>
                <button class="btn btn--primary" on:click=move |_| dialog_open.set(true)>
                    "New Assignment"
                </button>
            </header>

            <div class="stat-grid">
                {stat("Total", |s| s.total)}
                {stat("Active", |s| s.active)}
                {stat("Completed", |s| s.completed)}
                {stat("Overdue", |s| s.overdue)}
            </div>

            <Show
                when=move || !(loading.get() && rows.get().is_empty())
                fallback=|| view! { <p>"Loading assignments..."</p> }
            >
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No assignments yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Category"</th>
                                <th>"Assigned To"</th>
                                <th>"Leads"</th>
                                <th>"Priority"</th>
                                <th>"Status"</th>
                                <th>"Due"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || rows.get() key=|a| a.id.clone() let:row>
                                {
                                    let status = row.effective_status(clock::today());
                                    view! {
                                        <tr>
                                            <td>{row.category.clone()}</td>
                                            <td>{row.assigned_to.clone()}</td>
                                            <td>{row.lead_count}</td>
                                            <td>
                                                <PriorityBadge priority=row.priority/>
                                            </td>
                                            <td>
                                                <Badge
                                                    modifier=assignment_badge_class(status)
                                                    label=status.label().to_owned()
                                                />
                                            </td>
                                            <td>{row.due_date.map_or_else(|| "-".to_owned(), format_day_month_year)}</td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || dialog_open.get()>
                <NewAssignmentDialog
                    on_close=Callback::new(move |()| dialog_open.set(false))
                    on_assigned=Callback::new(move |()| {
                        dialog_open.set(false);
                        load();
                    })
                />
            </Show>
        </section>
    }
}
