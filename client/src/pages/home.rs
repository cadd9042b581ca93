//! Public landing page.

use leptos::prelude::*;
use schema::session::{MANAGER_LOGIN_PATH, WORKER_LOGIN_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"LeadFlow"</h1>
            <p class="home-page__tagline">"Capture, assign, and follow up on every lead."</p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href=MANAGER_LOGIN_PATH>
                    "Manager Login"
                </a>
                <a class="btn" href=WORKER_LOGIN_PATH>
                    "Worker Login"
                </a>
            </div>
        </div>
    }
}
