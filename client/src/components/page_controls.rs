//! Previous/next pagination for server-paged lists.

#[cfg(test)]
#[path = "page_controls_test.rs"]
mod page_controls_test;

use leptos::prelude::*;
use schema::Pagination;

#[must_use]
pub fn page_label(pagination: Pagination) -> String {
    format!("Page {} of {}", pagination.current_page, pagination.total_pages.max(1))
}

#[component]
pub fn PageControls(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(optional, into)] busy: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="page-controls">
            <button
                class="btn"
                disabled=move || busy.get() || !pagination.get().has_previous()
                on:click=move |_| on_page.run(pagination.get().current_page.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="page-controls__label">{move || page_label(pagination.get())}</span>
            <button
                class="btn"
                disabled=move || busy.get() || !pagination.get().has_next()
                on:click=move |_| on_page.run(pagination.get().current_page + 1)
            >
                "Next"
            </button>
        </div>
    }
}
