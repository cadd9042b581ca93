//! Worker dialog for logging a follow-up or ending the conversation.
//!
//! Both tabs post to `POST /lead/{id}/follow-up`; the body shape decides
//! which action the backend records.

use leptos::prelude::*;
use schema::FormErrors;
use schema::lead::{CloseConversationRequest, ConversationOutcome};
use schema::validate::validate_follow_up;

use crate::components::field_error::FieldError;
use crate::state::toasts::ToastState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    FollowUp,
    Close,
}

#[component]
pub fn FollowUpDialog(
    lead_id: String,
    lead_name: String,
    on_close: Callback<()>,
    /// Runs after the backend accepted either action.
    on_done: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let tab = RwSignal::new(Tab::FollowUp);
    let date = RwSignal::new(String::new());
    let conclusion = RwSignal::new(String::new());
    let outcome = RwSignal::new(ConversationOutcome::Positive);
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);
    let lead_id = StoredValue::new(lead_id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let id = lead_id.get_value();
        match tab.get() {
            Tab::FollowUp => {
                let body = match validate_follow_up(&date.get(), &conclusion.get(), crate::util::clock::today()) {
                    Ok(body) => body,
                    Err(e) => {
                        errors.set(e);
                        return;
                    }
                };
                busy.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::add_follow_up(&id, &body).await {
                        Ok(()) => {
                            toasts.update(|t| {
                                t.success("Follow-up added successfully!");
                            });
                            on_done.run(());
                        }
                        Err(e) => {
                            toasts.update(|t| {
                                t.error(e.toast_message("Failed to add follow-up."));
                            });
                        }
                    }
                    busy.set(false);
                });
            }
            Tab::Close => {
                if conclusion.get().trim().is_empty() {
                    errors.update(|e| e.insert("conclusion", "Conclusion is required"));
                    return;
                }
                let body = CloseConversationRequest::new(outcome.get(), &conclusion.get());
                busy.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::close_conversation(&id, &body).await {
                        Ok(()) => {
                            toasts.update(|t| {
                                t.success("Conversation ended successfully!");
                            });
                            on_done.run(());
                        }
                        Err(e) => {
                            toasts.update(|t| {
                                t.error(e.toast_message("Failed to end conversation."));
                            });
                        }
                    }
                    busy.set(false);
                });
            }
        }
    };

    let switch = move |next: Tab| {
        tab.set(next);
        errors.set(FormErrors::new());
    };
    let field_error = move |field: &'static str| errors.get().get(field).map(ToOwned::to_owned);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog dialog--follow-up" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="dialog__title">{format!("Follow-up: {lead_name}")}</h2>
                <div class="dialog__tabs">
                    <button
                        type="button"
                        class="dialog__tab"
                        class:dialog__tab--active=move || tab.get() == Tab::FollowUp
                        on:click=move |_| switch(Tab::FollowUp)
                    >
                        "Add Follow-up"
                    </button>
                    <button
                        type="button"
                        class="dialog__tab"
                        class:dialog__tab--active=move || tab.get() == Tab::Close
                        on:click=move |_| switch(Tab::Close)
                    >
                        "End Conversation"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == Tab::FollowUp
                    fallback=move || {
                        view! {
                            <label class="dialog__label">
                                "Outcome"
                                <select
                                    class="dialog__input"
                                    on:change=move |ev| {
                                        if let Ok(next) = event_target_value(&ev).parse() {
                                            outcome.set(next);
                                        }
                                    }
                                >
                                    <option value="positive" selected=move || outcome.get() == ConversationOutcome::Positive>
                                        "Positive"
                                    </option>
                                    <option value="negative" selected=move || outcome.get() == ConversationOutcome::Negative>
                                        "Negative"
                                    </option>
                                </select>
                            </label>
                        }
                    }
                >
                    <label class="dialog__label">
                        "Next follow-up date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| {
                                date.set(event_target_value(&ev));
                                errors.update(|e| e.clear("date"));
                            }
                        />
                    </label>
                    <FieldError message=Signal::derive(move || field_error("date"))/>
                </Show>

                <label class="dialog__label">
                    "Conclusion"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || conclusion.get()
                        on:input=move |ev| {
                            conclusion.set(event_target_value(&ev));
                            errors.update(|e| e.clear("conclusion"));
                        }
                    ></textarea>
                </label>
                <FieldError message=Signal::derive(move || field_error("conclusion"))/>

                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
