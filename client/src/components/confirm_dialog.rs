//! Generic yes/no confirmation modal.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    #[prop(into)] message: String,
    #[prop(default = "Confirm")] confirm_label: &'static str,
    #[prop(optional, into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Working..." } else { confirm_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
