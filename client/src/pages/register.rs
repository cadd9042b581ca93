//! Worker self-registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use schema::session::WORKER_LOGIN_PATH;
use schema::validate::validate_register;

use crate::state::toasts::ToastState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let avatar = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_register(
            &email.get(),
            &password.get(),
            &first_name.get(),
            &last_name.get(),
            &avatar.get(),
        ) {
            Ok(body) => body,
            Err(message) => {
                toasts.update(|t| {
                    t.error(message);
                });
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register_worker(&body).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Registration successful!");
                    });
                    navigate(WORKER_LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.error(e.toast_message("Registration failed"));
                    });
                }
            }
        });
    };

    let text_input = move |placeholder: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"LeadFlow"</h1>
                <p class="login-card__subtitle">"Worker Registration"</p>
                {text_input("Email *", "email", email)}
                {text_input("Password *", "password", password)}
                {text_input("First name", "text", first_name)}
                {text_input("Last name", "text", last_name)}
                {text_input("Avatar URL", "url", avatar)}
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=WORKER_LOGIN_PATH>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
