//! Authenticated application frame: sidebar, navbar, and the routed screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen behind a login is wrapped in `AppShell`. It owns the route
//! guard and the one-time current-user fetch, so individual pages never
//! repeat either.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use schema::Role;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::state::user::UserState;
use crate::util::auth::{install_role_redirect, redirect_target};

/// Frame for signed-in screens. `require` restricts the screen to one role;
/// without it any signed-in role is admitted.
#[component]
pub fn AppShell(#[prop(optional)] require: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = expect_context::<RwSignal<UserState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_role_redirect(auth, require, use_navigate());

    Effect::new(move || {
        let state = auth.get();
        if state.loading || !state.session.is_authenticated() {
            return;
        }
        let current = user.get_untracked();
        if current.user.is_some() || current.loading {
            return;
        }
        user.update(|u| u.loading = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_current_user().await;
            user.update(|u| {
                u.loading = false;
                u.user = result.ok();
            });
        });
    });

    let admitted = move || {
        let state = auth.get();
        !state.loading && redirect_target(&state, require).is_none()
    };

    view! {
        <div class="app-shell" class:app-shell--collapsed=move || !ui.get().sidebar_expanded>
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="app-shell__content">
                    <Show when=admitted fallback=|| view! { <p class="app-shell__loading">"Loading..."</p> }>
                        {children()}
                    </Show>
                </main>
            </div>
        </div>
    }
}
