//! Panels shared by the manager and worker dashboards.

#[cfg(test)]
#[path = "dashboard_panels_test.rs"]
mod dashboard_panels_test;

use leptos::prelude::*;
use schema::Lead;
use schema::dashboard::{LeadKpis, WorkerScore, recent_leads, upcoming_follow_ups, worker_leaderboard};
use schema::format::relative_day_label;

use crate::components::badge::{CategoryBadge, StatusBadge};
use crate::util::clock;

/// Rows shown in the list panels.
pub const PANEL_ROWS: usize = 5;

/// Bar length for `count` relative to the largest value, in whole percent.
#[must_use]
pub fn bar_width(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    count.min(max) * 100 / max
}

#[component]
pub fn FunnelPanel(#[prop(into)] kpis: Signal<LeadKpis>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Lead Funnel"</h2>
            {move || {
                let funnel = kpis.get().funnel();
                let max = funnel.iter().map(|(_, n)| *n).max().unwrap_or(0);
                funnel
                    .into_iter()
                    .map(|(status, count)| {
                        view! {
                            <div class="bar-row">
                                <span class="bar-row__label">{status.label()}</span>
                                <div class="bar-row__track">
                                    <div
                                        class=format!("bar-row__fill bar-row__fill--{}", status.as_str())
                                        style=format!("width: {}%", bar_width(count, max))
                                    ></div>
                                </div>
                                <span class="bar-row__value">{count}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[component]
pub fn CategoryPanel(#[prop(into)] kpis: Signal<LeadKpis>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Leads by Category"</h2>
            {move || {
                let rows = kpis.get().by_category;
                if rows.is_empty() {
                    return view! { <p class="empty-state">"No leads yet."</p> }.into_any();
                }
                let max = rows.first().map_or(0, |(_, n)| *n);
                rows.into_iter()
                    .map(|(title, count)| {
                        view! {
                            <div class="bar-row">
                                <span class="bar-row__label">{title}</span>
                                <div class="bar-row__track">
                                    <div class="bar-row__fill" style=format!("width: {}%", bar_width(count, max))></div>
                                </div>
                                <span class="bar-row__value">{count}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn RecentLeadsPanel(#[prop(into)] leads: Signal<Vec<Lead>>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Recent Leads"</h2>
            <ul class="panel__list">
                {move || {
                    leads.with(|all| {
                        recent_leads(all, PANEL_ROWS)
                            .into_iter()
                            .map(|lead| {
                                view! {
                                    <li class="panel__item">
                                        <span class="panel__primary">{lead.name.clone()}</span>
                                        <CategoryBadge
                                            title=lead.category_title().to_owned()
                                            color=lead.category_color().to_owned()
                                        />
                                        <StatusBadge status=lead.status/>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn UpcomingFollowUpsPanel(#[prop(into)] leads: Signal<Vec<Lead>>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Upcoming Follow-ups"</h2>
            {move || {
                let today = clock::today();
                let rows: Vec<(String, String)> = leads.with(|all| {
                    upcoming_follow_ups(all, today, PANEL_ROWS)
                        .into_iter()
                        .map(|(lead, day)| (lead.name.clone(), relative_day_label(day, today)))
                        .collect()
                });
                if rows.is_empty() {
                    return view! { <p class="empty-state">"Nothing scheduled."</p> }.into_any();
                }
                view! {
                    <ul class="panel__list">
                        {rows
                            .into_iter()
                            .map(|(name, when)| {
                                view! {
                                    <li class="panel__item">
                                        <span class="panel__primary">{name}</span>
                                        <span class="panel__secondary">{when}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn LeaderboardPanel(#[prop(into)] leads: Signal<Vec<Lead>>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Worker Leaderboard"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Worker"</th>
                        <th>"Assigned"</th>
                        <th>"Converted"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        leads
                            .with(|all| worker_leaderboard(all))
                            .into_iter()
                            .take(PANEL_ROWS)
                            .map(|WorkerScore { name, assigned, converted }| {
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{assigned}</td>
                                        <td>{converted}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}
