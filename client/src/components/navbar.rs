//! Top bar: sidebar toggle, notification tray, and theme toggle.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let unread = move || notifications.get().unread_count();

    view! {
        <header class="navbar">
            <button
                class="btn btn--ghost navbar__toggle"
                title="Toggle sidebar"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <span class="navbar__spacer"></span>
            <div class="navbar__notifications">
                <button
                    class="btn btn--ghost navbar__bell"
                    title="Notifications"
                    on:click=move |_| ui.update(UiState::toggle_notifications)
                >
                    "🔔"
                    <Show when=move || { unread() > 0 }>
                        <span class="navbar__badge">{unread}</span>
                    </Show>
                </button>
                <Show when=move || ui.get().notifications_open>
                    <NotificationTray/>
                </Show>
            </div>
            <button
                class="btn btn--ghost navbar__theme"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}

#[component]
fn NotificationTray() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let rows = move || {
        notifications
            .get()
            .items
            .into_iter()
            .map(|n| {
                let id = n.id;
                let truncates = n.should_truncate();
                let expanded = n.expanded;
                let read = n.read;
                let preview = n.preview();
                view! {
                    <li class="notification" class:notification--unread=!read>
                        <div class="notification__head">
                            <span class="notification__title">{n.title}</span>
                            <span class="notification__time">{n.time}</span>
                        </div>
                        <p class="notification__message">{preview}</p>
                        <div class="notification__actions">
                            <Show when=move || truncates>
                                <button
                                    class="btn btn--link"
                                    on:click=move |_| notifications.update(|s| s.toggle_expand(id))
                                >
                                    {if expanded { "Show less" } else { "Show more" }}
                                </button>
                            </Show>
                            <Show when=move || !read>
                                <button
                                    class="btn btn--link"
                                    on:click=move |_| notifications.update(|s| s.mark_read(id))
                                >
                                    "Mark read"
                                </button>
                            </Show>
                            <button
                                class="btn btn--link btn--danger"
                                on:click=move |_| notifications.update(|s| s.delete(id))
                            >
                                "Delete"
                            </button>
                        </div>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="notification-tray">
            <div class="notification-tray__header">
                <span>{move || format!("Notifications ({})", notifications.get().items.len())}</span>
                <button class="btn btn--link" on:click=move |_| notifications.update(NotificationState::mark_all_read)>
                    "Mark all read"
                </button>
                <button class="btn btn--link btn--danger" on:click=move |_| notifications.update(NotificationState::clear)>
                    "Clear all"
                </button>
            </div>
            <Show
                when=move || !notifications.get().items.is_empty()
                fallback=|| view! { <p class="notification-tray__empty">"No notifications"</p> }
            >
                <ul class="notification-tray__list">{rows}</ul>
            </Show>
        </div>
    }
}
