//! Lead table with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the all-leads screen over the filtered current page. Actions
//! are reported upward as lead ids; the page owns dialogs and requests.

#[cfg(test)]
#[path = "lead_table_test.rs"]
mod lead_table_test;

use leptos::prelude::*;
use schema::Lead;

use crate::components::badge::{CategoryBadge, PriorityBadge, StatusBadge};

/// Header row. The Assigned To column is dropped when `show_assignee` is off.
#[must_use]
pub fn column_headers(show_assignee: bool) -> Vec<&'static str> {
    let mut headers = vec!["Lead", "Position", "Category", "Priority", "Status"];
    if show_assignee {
        headers.push("Assigned To");
    }
    headers.extend(["Last Contact", "Follow-up", "Actions"]);
    headers
}

#[component]
pub fn LeadTable(
    #[prop(into)] leads: Signal<Vec<Lead>>,
    #[prop(into)] can_follow_up: Signal<bool>,
    #[prop(into)] show_assignee: Signal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    on_follow_up: Callback<String>,
) -> impl IntoView {
    let rows = move || {
        leads
            .get()
            .into_iter()
            .map(|lead| {
                let edit_id = lead.id.clone();
                let delete_id = lead.id.clone();
                let follow_id = lead.id.clone();
                let category_title = lead.category_title().to_owned();
                let category_color = lead.category_color().to_owned();
                let email = lead.email_label().to_owned();
                let phone = lead.phone_label().to_owned();
                let position = lead.position_label().to_owned();
                let assignee = lead.assignee_label().to_owned();
                let last_contact = lead.last_contact_label();
                let follow_up = lead.follow_up_label();
                view! {
                    <tr class="lead-table__row">
                        <td>
                            <span class="lead-table__name">{lead.name}</span>
                            <span class="lead-table__sub">{email}</span>
                            <span class="lead-table__sub">{phone}</span>
                        </td>
                        <td>{position}</td>
                        <td><CategoryBadge title=category_title color=category_color/></td>
                        <td><PriorityBadge priority=lead.priority/></td>
                        <td><StatusBadge status=lead.status/></td>
                        <Show when=move || show_assignee.get()>
                            <td>{assignee.clone()}</td>
                        </Show>
                        <td>{last_contact}</td>
                        <td>{follow_up}</td>
                        <td class="lead-table__actions">
                            <button class="btn btn--small" on:click=move |_| on_edit.run(edit_id.clone())>
                                "Edit"
                            </button>
                            <Show when=move || can_follow_up.get()>
                                <button
                                    class="btn btn--small btn--primary"
                                    on:click={
                                        let id = follow_id.clone();
                                        move |_| on_follow_up.run(id.clone())
                                    }
                                >
                                    "Follow-up"
                                </button>
                            </Show>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| on_delete.run(delete_id.clone())
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !leads.get().is_empty()
            fallback=|| view! { <p class="lead-table__empty">"No leads found."</p> }
        >
            <table class="lead-table">
                <thead>
                    <tr>
                        {move || {
                            column_headers(show_assignee.get())
                                .into_iter()
                                .map(|h| view! { <th>{h}</th> })
                                .collect::<Vec<_>>()
                        }}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
