//! Full-panel error state with a reload action.

use leptos::prelude::*;

#[component]
pub fn ErrorScreen(#[prop(into)] message: Signal<String>, on_reload: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-screen">
            <h2 class="error-screen__title">"Something went wrong"</h2>
            <p class="error-screen__message">{move || message.get()}</p>
            <button class="btn btn--primary" on:click=move |_| on_reload.run(())>
                "Reload"
            </button>
        </div>
    }
}
