//! Dashboard KPI tile with a trend indicator.

#[cfg(test)]
#[path = "kpi_card_test.rs"]
mod kpi_card_test;

use leptos::prelude::*;
use schema::dashboard::format_change;

/// Modifier class coloring the change indicator.
#[must_use]
pub fn trend_class(change: f64) -> &'static str {
    if change >= 0.0 { "kpi-card__change kpi-card__change--up" } else { "kpi-card__change kpi-card__change--down" }
}

#[component]
pub fn KpiCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    change: f64,
    #[prop(optional)] hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-card__title">{title}</span>
            <span class="kpi-card__value">{move || value.get()}</span>
            <span class=trend_class(change)>{format_change(change)}</span>
            <Show when=move || !hint.is_empty()>
                <span class="kpi-card__hint">{hint}</span>
            </Show>
        </div>
    }
}
