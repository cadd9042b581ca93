//! Manager campaign screen over the local campaign book.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use std::str::FromStr;

use leptos::prelude::*;
use schema::{CampaignBook, CampaignFilter, CampaignKind, CampaignStatus};

use crate::components::campaign_card::CampaignCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::toasts::ToastState;
use crate::util::clock;

/// Which campaign dialog is open, and for which campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignDialog {
    Send(u32),
    Delete(u32),
    ViewLeads(u32),
}

/// Dropdown value to filter choice; `all` and unknown values select everything.
#[must_use]
pub fn parse_choice<T: FromStr>(raw: &str) -> Option<T> {
    if raw.eq_ignore_ascii_case("all") {
        return None;
    }
    raw.parse().ok()
}

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let book = RwSignal::new(CampaignBook::seeded());
    let filter = RwSignal::new(CampaignFilter::default());
    let dialog = RwSignal::new(None::<CampaignDialog>);

    let stats = Signal::derive(move || book.with(CampaignBook::stats));
    let title_of = move |id: u32| book.with(|b| b.get(id).map(|c| c.title.clone()).unwrap_or_default());

    let close = Callback::new(move |()| dialog.set(None));
    let on_send = Callback::new(move |id: u32| dialog.set(Some(CampaignDialog::Send(id))));
    let on_delete = Callback::new(move |id: u32| dialog.set(Some(CampaignDialog::Delete(id))));
    let on_view = Callback::new(move |id: u32| dialog.set(Some(CampaignDialog::ViewLeads(id))));

    let confirm = Callback::new(move |()| {
        match dialog.get_untracked() {
            Some(CampaignDialog::Send(id)) => {
                if book.try_update(|b| b.mark_sent(id, clock::today())).unwrap_or(false) {
                    toasts.update(|t| {
                        t.success("Campaign sent successfully!");
                    });
                }
            }
            Some(CampaignDialog::Delete(id)) => {
                if book.try_update(|b| b.remove(id)).flatten().is_some() {
                    toasts.update(|t| {
                        t.success("Campaign deleted");
                    });
                }
            }
            Some(CampaignDialog::ViewLeads(_)) | None => {}
        }
        dialog.set(None);
    });

    let stat = move |label: &'static str, value: Signal<String>| {
        view! {
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || value.get()}</span>
            </div>
        }
    };

    let dialog_view = move || {
        let open = dialog.get()?;
        Some(match open {
            CampaignDialog::Send(id) => view! {
                <ConfirmDialog
                    title="Send Campaign"
                    message=format!("Send \"{}\" to every recipient now?", title_of(id))
                    confirm_label="Send"
                    on_cancel=close
                    on_confirm=confirm
                />
            }
            .into_any(),
            CampaignDialog::Delete(id) => view! {
                <ConfirmDialog
                    title="Delete Campaign"
                    message=format!("Delete \"{}\"? This cannot be undone.", title_of(id))
                    confirm_label="Delete"
                    on_cancel=close
                    on_confirm=confirm
                />
            }
            .into_any(),
            CampaignDialog::ViewLeads(id) => {
                let recipients: Vec<_> = book.with(|b| b.recipients_of(id).into_iter().cloned().collect());
                view! {
                    <div class="dialog-backdrop" on:click=move |_| close.run(())>
                        <div class="dialog" on:click=|ev| ev.stop_propagation()>
                            <h2 class="dialog__title">{format!("Leads in \"{}\"", title_of(id))}</h2>
                            <Show
                                when={
                                    let empty = recipients.is_empty();
                                    move || !empty
                                }
                                fallback=|| view! { <p class="empty-state">"No leads in this campaign."</p> }
                            >
                                <ul class="recipient-list">
                                    {recipients
                                        .iter()
                                        .map(|r| {
                                            view! {
                                                <li class="recipient-list__item">
                                                    <span class="recipient-list__name">{r.name.clone()}</span>
                                                    <span class="recipient-list__email">{r.email.clone()}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </Show>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| close.run(())>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <section class="campaigns-page">
            <header class="page-header">
                <h1>"Campaigns"</h1>
            </header>

            <div class="stat-grid">
                {stat("Total Campaigns", Signal::derive(move || stats.get().total.to_string()))}
                {stat("Sent", Signal::derive(move || stats.get().sent.to_string()))}
                {stat("Drafts", Signal::derive(move || stats.get().drafts.to_string()))}
                {stat(
                    "Messages Delivered",
                    Signal::derive(move || {
                        let s = stats.get();
                        format!("{} / {}", s.messages_sent, s.recipients)
                    }),
                )}
                {stat(
                    "Email / SMS",
                    Signal::derive(move || {
                        let s = stats.get();
                        format!("{} / {}", s.email, s.sms)
                    }),
                )}
            </div>

            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder="Search campaigns"
                    prop:value=move || filter.get().search
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.search = v);
                    }
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        let choice = parse_choice::<CampaignStatus>(&event_target_value(&ev));
                        filter.update(|f| f.status = choice);
                    }
                >
                    <option value="all">"All Statuses"</option>
                    <option value="draft">"Draft"</option>
                    <option value="sent">"Sent"</option>
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        let choice = parse_choice::<CampaignKind>(&event_target_value(&ev));
                        filter.update(|f| f.kind = choice);
                    }
                >
                    <option value="all">"All Types"</option>
                    <option value="email">"Email"</option>
                    <option value="sms">"SMS"</option>
                </select>
            </div>

            <div class="campaign-grid">
                {move || {
                    let visible: Vec<_> = book.with(|b| filter.with(|f| b.filtered(f).into_iter().cloned().collect()));
                    if visible.is_empty() {
                        return view! { <p class="empty-state">"No campaigns match your filters."</p> }.into_any();
                    }
                    visible
                        .into_iter()
                        .map(|campaign| {
                            view! { <CampaignCard campaign=campaign on_send=on_send on_delete=on_delete on_view=on_view/> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            {dialog_view}
        </section>
    }
}
