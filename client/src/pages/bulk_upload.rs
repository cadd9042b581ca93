//! Spreadsheet import of many leads at once.
//!
//! The picked file is previewed by splitting its text on lines and commas,
//! then posted as multipart with the chosen default category and, for
//! managers, an optional assignee.

#[cfg(test)]
#[path = "bulk_upload_test.rs"]
mod bulk_upload_test;

use leptos::prelude::*;
use schema::bulk::BulkUploadForm;
use schema::{Category, Worker};

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::file::PickedFile;

/// Data rows shown under the preview header.
pub const PREVIEW_LIMIT: usize = 10;

/// Split preview rows into a header and at most `limit` body rows.
#[must_use]
pub fn split_preview(mut rows: Vec<Vec<String>>, limit: usize) -> (Vec<String>, Vec<Vec<String>>) {
    if rows.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let header = rows.remove(0);
    rows.truncate(limit);
    (header, rows)
}

#[component]
pub fn BulkUploadPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let file = RwSignal::new_local(None::<PickedFile>);
    let preview = RwSignal::new(Vec::<Vec<String>>::new());
    let category = RwSignal::new(String::new());
    let assignee = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let workers = RwSignal::new(Vec::<Worker>::new());
    let busy = RwSignal::new(false);

    let can_choose_assignee = move || auth.get().session.can_choose_bulk_assignee();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Failed to load categories."));
                }),
            }
        });
    });
    Effect::new(move || {
        if !can_choose_assignee() {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::fetch_workers().await {
                workers.set(list);
            }
        });
    });

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(picked) = crate::util::file::picked_file(&ev) else {
                file.set(None);
                preview.set(Vec::new());
                return;
            };
            if !schema::bulk::is_spreadsheet(&picked.meta.file_name, &picked.meta.mime) {
                toasts.update(|t| {
                    t.error("Please upload a valid Excel (.xlsx) file.");
                });
                file.set(None);
                preview.set(Vec::new());
                return;
            }
            let handle = picked.file.clone();
            file.set(Some(picked));
            leptos::task::spawn_local(async move {
                match crate::util::file::read_text(&handle).await {
                    Ok(text) => preview.set(schema::bulk::preview_rows(&text)),
                    Err(e) => {
                        log::warn!("bulk preview failed: {e}");
                        preview.set(Vec::new());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_download = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use schema::bulk::{TEMPLATE_FILE_NAME, TEMPLATE_MIME, template_csv};

            if let Err(e) = crate::util::file::download_text(TEMPLATE_FILE_NAME, TEMPLATE_MIME, &template_csv()) {
                log::warn!("template download failed: {e}");
                toasts.update(|t| {
                    t.error("Could not download the template.");
                });
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let picked = file.get();
        let form = BulkUploadForm {
            has_file: picked.is_some(),
            category: category.get(),
            assignee: if can_choose_assignee() { assignee.get() } else { String::new() },
        };
        if let Err(message) = form.validate() {
            toasts.update(|t| {
                t.error(message);
            });
            return;
        }
        let Some(picked) = picked else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::bulk_upload(&picked, &form.multipart_fields()).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Leads uploaded successfully!");
                    });
                    file.set(None);
                    preview.set(Vec::new());
                }
                Err(e) if e.is_network() => toasts.update(|t| {
                    t.error("Upload failed. Please try again.");
                }),
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Upload error."));
                }),
            }
        });
    };

    let preview_table = move || {
        let (header, body) = split_preview(preview.get(), PREVIEW_LIMIT);
        if header.is_empty() {
            return None;
        }
        Some(view! {
            <div class="bulk-preview">
                <h2>"Preview"</h2>
                <table class="data-table">
                    <thead>
                        <tr>{header.into_iter().map(|cell| view! { <th>{cell}</th> }).collect::<Vec<_>>()}</tr>
                    </thead>
                    <tbody>
                        {body
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}</tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        })
    };

    view! {
        <section class="bulk-page">
            <header class="page-header">
                <h1>"Bulk Lead Upload"</h1>
                <button type="button" class="btn btn--ghost" on:click=on_download>
                    "Download Template"
                </button>
            </header>
            <form class="bulk-form" on:submit=on_submit>
                <label class="lead-form__field">
                    "Spreadsheet (.xlsx)"
                    <input class="lead-form__input" type="file" accept=".xlsx" on:change=on_file/>
                    <span class="lead-form__hint">
                        {move || file.with(|f| f.as_ref().map(|p| p.meta.file_name.clone())).unwrap_or_default()}
                    </span>
                </label>
                <label class="lead-form__field">
                    "Default Category *"
                    <select class="lead-form__input" on:change=move |ev| category.set(event_target_value(&ev))>
                        <option value="" selected=move || category.get().is_empty()>
                            "Select a category"
                        </option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let id = c.id.clone();
                                    view! {
                                        <option value=c.id selected=move || category.get() == id>
                                            {c.title}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <Show when=can_choose_assignee>
                    <label class="lead-form__field">
                        "Assign To"
                        <select class="lead-form__input" on:change=move |ev| assignee.set(event_target_value(&ev))>
                            <option value="">"Leave unassigned"</option>
                            {move || {
                                workers
                                    .get()
                                    .into_iter()
                                    .map(|w| view! { <option value=w.id>{w.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </Show>
                <div class="lead-form__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Uploading..." } else { "Upload Leads" }}
                    </button>
                </div>
            </form>
            {preview_table}
        </section>
    }
}
