//! Campaign tile with send/delete/view actions.

#[cfg(test)]
#[path = "campaign_card_test.rs"]
mod campaign_card_test;

use leptos::prelude::*;
use schema::Campaign;
use schema::dashboard::campaign_badge_class;
use schema::format::format_day_month_year;

use crate::components::badge::Badge;

/// Share of recipients reached, in whole percent.
#[must_use]
pub fn delivery_percent(sent: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (u64::from(sent.min(total)) * 100 / u64::from(total)).try_into().unwrap_or(100)
}

#[component]
pub fn CampaignCard(
    campaign: Campaign,
    on_send: Callback<u32>,
    on_delete: Callback<u32>,
    on_view: Callback<u32>,
) -> impl IntoView {
    let id = campaign.id;
    let is_draft = campaign.is_draft();
    let percent = delivery_percent(campaign.sent_count, campaign.total_count);
    let last_sent = campaign.last_sent.map_or_else(|| "Never".to_owned(), format_day_month_year);

    view! {
        <article class="campaign-card">
            <header class="campaign-card__header">
                <h3 class="campaign-card__title">{campaign.title}</h3>
                <Badge modifier=campaign_badge_class(campaign.status) label=campaign.status.label().to_owned()/>
            </header>
            <p class="campaign-card__description">{campaign.description}</p>
            <dl class="campaign-card__meta">
                <dt>"Type"</dt>
                <dd>{campaign.kind.label()}</dd>
                <dt>"Category"</dt>
                <dd>{campaign.category}</dd>
                <dt>"Created by"</dt>
                <dd>{campaign.created_by}</dd>
                <dt>"Last sent"</dt>
                <dd>{last_sent}</dd>
                <dt>"Open rate"</dt>
                <dd>{format!("{}%", campaign.open_rate)}</dd>
            </dl>
            <div class="campaign-card__progress">
                <div class="campaign-card__bar" style=format!("width: {percent}%")></div>
            </div>
            <span class="campaign-card__count">
                {format!("{} / {} sent", campaign.sent_count, campaign.total_count)}
            </span>
            <div class="campaign-card__actions">
                <button class="btn" on:click=move |_| on_view.run(id)>
                    "View Leads"
                </button>
                <Show when=move || is_draft>
                    <button class="btn btn--primary" on:click=move |_| on_send.run(id)>
                        "Send"
                    </button>
                </Show>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
