//! Manager overview: KPIs, funnel, category mix, and team leaderboard.

#[cfg(test)]
#[path = "manager_dashboard_test.rs"]
mod manager_dashboard_test;

use leptos::prelude::*;
use schema::Lead;
use schema::dashboard::LeadKpis;

use crate::components::dashboard_panels::{
    CategoryPanel, FunnelPanel, LeaderboardPanel, RecentLeadsPanel, UpcomingFollowUpsPanel,
};
use crate::components::kpi_card::KpiCard;
use crate::state::toasts::ToastState;
use crate::util::clock;

/// Fetch the first lead page for a dashboard. Returns the rows and a loading flag.
pub(crate) fn load_dashboard_leads() -> (RwSignal<Vec<Lead>>, RwSignal<bool>) {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let leads = RwSignal::new(Vec::<Lead>::new());
    let loading = RwSignal::new(true);
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_lead_page(1).await {
                Ok(page) => leads.set(page.leads),
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Failed to load dashboard data."));
                }),
            }
            loading.set(false);
        });
    });
    (leads, loading)
}

/// Conversion-rate card text, e.g. `18.5%`.
#[must_use]
pub fn percent_label(rate: f64) -> String {
    format!("{rate}%")
}

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let (leads, loading) = load_dashboard_leads();
    let kpis = Signal::derive(move || leads.with(|all| LeadKpis::compute(all, clock::today())));
    let leads_signal: Signal<Vec<Lead>> = leads.into();

    view! {
        <section class="dashboard">
            <header class="page-header">
                <h1>"Manager Dashboard"</h1>
                <Show when=move || loading.get()>
                    <span class="page-header__meta">"Refreshing..."</span>
                </Show>
            </header>
            <div class="kpi-grid">
                <KpiCard title="Total Leads" value=Signal::derive(move || kpis.get().total.to_string()) change=12.0/>
                <KpiCard
                    title="Conversion Rate"
                    value=Signal::derive(move || percent_label(kpis.get().conversion_rate))
                    change=2.5
                />
                <KpiCard
                    title="Engaged Leads"
                    value=Signal::derive(move || kpis.get().engaged().to_string())
                    change=8.0
                    hint="In progress or awaiting follow-up"
                />
                <KpiCard
                    title="Overdue Tasks"
                    value=Signal::derive(move || kpis.get().overdue.to_string())
                    change=10.0
                />
            </div>
            <div class="panel-grid">
                <FunnelPanel kpis=kpis/>
                <CategoryPanel kpis=kpis/>
                <LeaderboardPanel leads=leads_signal/>
                <UpcomingFollowUpsPanel leads=leads_signal/>
                <RecentLeadsPanel leads=leads_signal/>
            </div>
        </section>
    }
}
