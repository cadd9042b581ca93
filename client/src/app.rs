//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contexts provided here:
//! - `RwSignal<AuthState>`: role claims parsed once from the role cookies.
//! - `RwSignal<UiState>`: dark mode and sidebar chrome.
//! - `RwSignal<ToastState>`: transient success/error notifications.
//! - `RwSignal<UserState>`: the signed-in user's display name.
//! - `RwSignal<NotificationState>`: the navbar notification tray.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use schema::Role;

use crate::components::app_shell::AppShell;
use crate::components::toast_stack::ToastStack;
use crate::pages::add_lead::AddLeadPage;
use crate::pages::all_leads::AllLeadsPage;
use crate::pages::assignments::AssignmentsPage;
use crate::pages::bulk_upload::BulkUploadPage;
use crate::pages::campaigns::CampaignsPage;
use crate::pages::categories::CategoriesPage;
use crate::pages::home::HomePage;
use crate::pages::login::{ManagerLoginPage, WorkerLoginPage};
use crate::pages::manager_dashboard::ManagerDashboardPage;
use crate::pages::register::RegisterPage;
use crate::pages::update_lead::UpdateLeadPage;
use crate::pages::worker_dashboard::WorkerDashboardPage;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;
use crate::state::toasts::ToastState;
use crate::state::ui::UiState;
use crate::state::user::UserState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let user = RwSignal::new(UserState::default());
    let notifications = RwSignal::new(NotificationState::seeded());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(user);
    provide_context(notifications);

    // Cookies and stored preferences only exist in the browser. Effects run
    // after hydration, so server and client markup agree on first paint.
    Effect::new(move || {
        auth.set(AuthState::resolved(crate::util::cookies::read_session()));
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/leadflow.css"/>
        <Title text="LeadFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("manager"), StaticSegment("auth"), StaticSegment("login"))
                    view=ManagerLoginPage
                />
                <Route
                    path=(StaticSegment("worker"), StaticSegment("auth"), StaticSegment("login"))
                    view=WorkerLoginPage
                />
                <Route
                    path=(StaticSegment("worker"), StaticSegment("auth"), StaticSegment("register"))
                    view=RegisterPage
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("dashboard"))
                    view=|| view! { <AppShell require=Role::Manager><ManagerDashboardPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("category"))
                    view=|| view! { <AppShell require=Role::Manager><CategoriesPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("assignment"))
                    view=|| view! { <AppShell require=Role::Manager><AssignmentsPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("campaign"))
                    view=|| view! { <AppShell require=Role::Manager><CampaignsPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("worker"), StaticSegment("dashboard"))
                    view=|| view! { <AppShell require=Role::Worker><WorkerDashboardPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("leads"), StaticSegment("all-leads"))
                    view=|| view! { <AppShell><AllLeadsPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("leads"), StaticSegment("upload-leads"))
                    view=|| view! { <AppShell><AddLeadPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("leads"), StaticSegment("upload-leads-bulk"))
                    view=|| view! { <AppShell><BulkUploadPage/></AppShell> }
                />
                <Route
                    path=(StaticSegment("leads"), StaticSegment("update-leads"), ParamSegment("id"))
                    view=|| view! { <AppShell><UpdateLeadPage/></AppShell> }
                />
            </Routes>
        </Router>
        <ToastStack/>
    }
}
