//! Manager and worker sign-in screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend answers a successful login by setting the session cookies.
//! After that the page re-reads cookies into `AuthState` and routes to the
//! role's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use schema::session::WORKER_REGISTER_PATH;
use schema::validate::validate_login;
use schema::{ApiError, Role};

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;

/// Toast text for a failed login.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_network() {
        return "Something went wrong. Try again.".to_owned();
    }
    format!("Login failed: {}", err.toast_message("Invalid credentials"))
}

#[component]
pub fn ManagerLoginPage() -> impl IntoView {
    view! { <LoginCard role=Role::Manager/> }
}

#[component]
pub fn WorkerLoginPage() -> impl IntoView {
    view! { <LoginCard role=Role::Worker/> }
}

#[component]
fn LoginCard(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Cookies may have changed since the app loaded (logout, expiry).
    Effect::new(move || auth.set(AuthState::resolved(crate::util::cookies::read_session())));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_login(&email.get(), &password.get()) {
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
            let result = match role {
                Role::Manager => crate::net::api::login_manager(&body).await,
                Role::Worker => crate::net::api::login_worker(&body).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Login successful!");
                    });
                    auth.set(AuthState::resolved(crate::util::cookies::read_session()));
                    navigate(role.dashboard_path(), NavigateOptions::default());
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.error(login_error_message(&e));
                    });
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"LeadFlow"</h1>
                <p class="login-card__subtitle">{format!("{} Login", role.label())}</p>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <Show when=move || role == Role::Worker>
                    <p class="login-card__footer">
                        "No account? "
                        <a href=WORKER_REGISTER_PATH>"Register"</a>
                    </p>
                </Show>
            </form>
        </div>
    }
}
