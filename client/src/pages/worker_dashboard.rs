//! Worker overview of their own leads and follow-up workload.

use leptos::prelude::*;
use schema::Lead;
use schema::dashboard::LeadKpis;

use crate::components::dashboard_panels::{FunnelPanel, RecentLeadsPanel, UpcomingFollowUpsPanel};
use crate::components::kpi_card::KpiCard;
use crate::pages::manager_dashboard::load_dashboard_leads;
use crate::util::clock;

#[component]
pub fn WorkerDashboardPage() -> impl IntoView {
    let (leads, loading) = load_dashboard_leads();
    let kpis = Signal::derive(move || leads.with(|all| LeadKpis::compute(all, clock::today())));
    let leads_signal: Signal<Vec<Lead>> = leads.into();

    view! {
        <section class="dashboard">
            <header class="page-header">
                <h1>"My Dashboard"</h1>
                <Show when=move || loading.get()>
                    <span class="page-header__meta">"Refreshing..."</span>
                </Show>
                <a class="btn btn--primary" href=schema::session::ADD_LEAD_PATH>
                    "Add Lead"
                </a>
            </header>
            <div class="kpi-grid">
                <KpiCard
                    title="Total Assigned Leads"
                    value=Signal::derive(move || kpis.get().total.to_string())
                    change=5.0
                />
                <KpiCard
                    title="Pending Follow-Ups"
                    value=Signal::derive(move || kpis.get().overdue.to_string())
                    change={-3.0}
                    hint="Follow-up date has passed"
                />
                <KpiCard
                    title="Follow-Ups Today"
                    value=Signal::derive(move || kpis.get().due_today.to_string())
                    change=2.0
                />
                <KpiCard
                    title="Missing Follow-Up"
                    value=Signal::derive(move || kpis.get().missing_follow_up.to_string())
                    change=1.0
                />
            </div>
            <div class="panel-grid">
                <UpcomingFollowUpsPanel leads=leads_signal/>
                <RecentLeadsPanel leads=leads_signal/>
                <FunnelPanel kpis=kpis/>
            </div>
        </section>
    }
}
