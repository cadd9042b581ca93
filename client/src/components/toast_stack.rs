//! Fixed-position stack of success/error toasts.
//!
//! Each toast dismisses itself after `TOAST_LIFETIME_MS`; clicking closes it
//! early.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get().items key=|t| t.id let:toast>
                <ToastItem toast=toast/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            crate::state::toasts::TOAST_LIFETIME_MS,
        )))
        .await;
        toasts.update(|t| t.dismiss(id));
    });

    view! {
        <div class=toast.kind.class() role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message}
        </div>
    }
}
