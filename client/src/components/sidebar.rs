//! Role-specific navigation sidebar with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::state::user::UserState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = expect_context::<RwSignal<UserState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let session = auth.get_untracked().session;
        crate::util::cookies::clear_session(&session);
        user.set(UserState::default());
        navigate(session.login_path(), NavigateOptions::default());
    };

    let links = move || {
        auth.get()
            .session
            .nav_items()
            .iter()
            .map(|item| {
                let href = item.href;
                let active = move || location.pathname.get() == href;
                view! {
                    <a class="sidebar__link" class:sidebar__link--active=active href=href title=item.title>
                        <span class="sidebar__link-label">{item.title}</span>
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !ui.get().sidebar_expanded>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"LF"</span>
                <span class="sidebar__title">"LeadFlow"</span>
            </div>
            <nav class="sidebar__nav">{links}</nav>
            <div class="sidebar__footer">
                <span class="sidebar__avatar">{move || user.get().avatar_initials()}</span>
                <span class="sidebar__user">
                    {move || {
                        let state = user.get();
                        if state.loading { "Loading...".to_owned() } else { state.display_name().to_owned() }
                    }}
                </span>
                <span class="sidebar__role">
                    {move || auth.get().session.role().map(|r| r.label()).unwrap_or_default()}
                </span>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
