//! Colored pills for statuses and priorities.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;
use schema::dashboard::{priority_badge_class, status_badge_class};
use schema::{LeadStatus, Priority};

/// Full class attribute for a badge with modifier `modifier`.
#[must_use]
pub fn badge_class(modifier: &str) -> String {
    format!("badge {modifier}")
}

/// Generic badge; `modifier` is a `badge--*` class.
#[component]
pub fn Badge(modifier: String, label: String) -> impl IntoView {
    view! { <span class=badge_class(&modifier)>{label}</span> }
}

#[component]
pub fn StatusBadge(status: LeadStatus) -> impl IntoView {
    view! { <Badge modifier=status_badge_class(status) label=status.label().to_owned()/> }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! { <Badge modifier=priority_badge_class(priority) label=priority.label().to_owned()/> }
}

/// Category pill tinted with the category's own color.
#[component]
pub fn CategoryBadge(title: String, color: String) -> impl IntoView {
    view! {
        <span class="badge badge--category" style=format!("background-color: {color}")>
            {title}
        </span>
    }
}
