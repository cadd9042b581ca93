//! Manager CRUD over lead categories.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use schema::validate::validate_category;
use schema::{Category, FormErrors};

use crate::components::badge::CategoryBadge;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field_error::FieldError;
use crate::state::toasts::ToastState;

/// Color preselected for a new category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#4f46e5";

/// Editor contents. `editing` holds the id of the category being changed;
/// `None` creates a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryDraft {
    pub editing: Option<String>,
    pub title: String,
    pub description: String,
    pub color: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_owned(),
        }
    }
}

impl CategoryDraft {
    #[must_use]
    pub fn for_category(category: &Category) -> Self {
        Self {
            editing: Some(category.id.clone()),
            title: category.title.clone(),
            description: category.description.clone(),
            color: category.color.clone(),
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() { "Save Changes" } else { "Add Category" }
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let draft = RwSignal::new(CategoryDraft::default());
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Category>);

    let load = move || {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Failed to load categories."));
                }),
            }
            loading.set(false);
        });
    };
    Effect::new(move || load());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft.get();
        let body = match validate_category(&current.title, &current.description, &current.color) {
            Ok(body) => body,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = match current.editing.as_deref() {
                Some(id) => crate::net::api::update_category(id, &body).await,
                None => crate::net::api::create_category(&body).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    let message = if current.editing.is_some() { "Category updated" } else { "Category created" };
                    toasts.update(|t| {
                        t.success(message);
                    });
                    draft.set(CategoryDraft::default());
                    errors.set(FormErrors::new());
                    load();
                }
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Failed to save category."));
                }),
            }
        });
    };

    let confirm_delete = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_category(&target.id).await;
            busy.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    categories.update(|list| list.retain(|c| c.id != target.id));
                    if draft.get_untracked().editing.as_deref() == Some(target.id.as_str()) {
                        draft.set(CategoryDraft::default());
                    }
                    toasts.update(|t| {
                        t.success("Category deleted");
                    });
                }
                Err(e) => toasts.update(|t| {
                    t.error(e.toast_message("Failed to delete category."));
                }),
            }
        });
    });

    let error_for = move |key: &'static str| Signal::derive(move || errors.get().get(key).map(ToOwned::to_owned));

    view! {
        <section class="categories-page">
            <header class="page-header">
                <h1>"Categories"</h1>
            </header>
            <form class="category-form" on:submit=on_submit>
                <label class="lead-form__field">
                    "Title *"
                    <input
                        class="lead-form__input"
                        prop:value=move || draft.get().title
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.title = v);
                            errors.update(|e| e.clear("title"));
                        }
                    />
                    <FieldError message=error_for("title")/>
                </label>
                <label class="lead-form__field">
                    "Description"
                    <input
                        class="lead-form__input"
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.description = v);
                        }
                    />
                </label>
                <label class="lead-form__field">
                    "Color"
                    <input
                        class="lead-form__input lead-form__input--color"
                        type="color"
                        prop:value=move || draft.get().color
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.color = v);
                            errors.update(|e| e.clear("color"));
                        }
                    />
                    <FieldError message=error_for("color")/>
                </label>
                <div class="lead-form__actions">
                    <Show when=move || draft.get().editing.is_some()>
                        <button
                            type="button"
                            class="btn btn--ghost"
                            on:click=move |_| {
                                draft.set(CategoryDraft::default());
                                errors.set(FormErrors::new());
                            }
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || draft.get().submit_label()}
                    </button>
                </div>
            </form>

            <Show
                when=move || !loading.get() || !categories.get().is_empty()
                fallback=|| view! { <p>"Loading categories..."</p> }
            >
                <Show
                    when=move || !categories.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No categories yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Category"</th>
                                <th>"Description"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || categories.get() key=|c| c.id.clone() let:category>
                                {
                                    let edit_target = category.clone();
                                    let delete_target = category.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <CategoryBadge title=category.title.clone() color=category.color.clone()/>
                                            </td>
                                            <td>{category.description.clone()}</td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="btn btn--link btn--small"
                                                    on:click=move |_| {
                                                        draft.set(CategoryDraft::for_category(&edit_target));
                                                        errors.set(FormErrors::new());
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger btn--small"
                                                    on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>

            {move || {
                pending_delete
                    .get()
                    .map(|target| {
                        view! {
                            <ConfirmDialog
                                title="Delete Category"
                                message=format!("Delete category \"{}\"? Leads keep their data but lose the category.", target.title)
                                confirm_label="Delete"
                                busy=busy
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                                on_confirm=confirm_delete
                            />
                        }
                    })
            }}
        </section>
    }
}
