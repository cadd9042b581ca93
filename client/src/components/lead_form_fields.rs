//! Field set shared by the create and update lead forms.
//!
//! DESIGN
//! ======
//! The owning page holds the form, error dictionary, and picked document in
//! signals; this component only renders inputs and clears a field's error as
//! soon as that field is edited. Email is read-only in update mode, and the
//! follow-up list and last-contact inputs only appear there.

#[cfg(test)]
#[path = "lead_form_fields_test.rs"]
mod lead_form_fields_test;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use schema::validate::{FormMode, LeadForm};
use schema::{Category, FormErrors, LeadStatus, Priority};

use crate::components::field_error::FieldError;
use crate::util::file::PickedFile;

/// Lead sources offered in the dropdown.
pub const LEAD_SOURCES: [&str; 6] = ["Website", "Referral", "Advertisement", "Social Media", "Cold Call", "Other"];

/// Human-readable file size for the document hint.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[component]
pub fn LeadFormFields(
    form: RwSignal<LeadForm>,
    errors: RwSignal<FormErrors>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    mode: FormMode,
    document: RwSignal<Option<PickedFile>, LocalStorage>,
    document_error: RwSignal<Option<String>>,
    /// Raw comma-separated follow-up dates; update mode only.
    follow_up_text: RwSignal<String>,
) -> impl IntoView {
    let edit = move |field: &'static str, apply: &dyn Fn(&mut LeadForm)| {
        form.update(|f| apply(f));
        errors.update(|e| e.clear(field));
    };
    let error_for = move |field: &'static str| Signal::derive(move || errors.get().get(field).map(ToOwned::to_owned));
    let is_update = mode == FormMode::Update;

    let on_document = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let picked = crate::util::file::picked_file(&ev);
            match picked {
                Some(picked) => match schema::validate::validate_document(&picked.meta) {
                    Ok(()) => {
                        document_error.set(None);
                        document.set(Some(picked));
                    }
                    Err(message) => {
                        document_error.set(Some(message.to_owned()));
                        document.set(None);
                    }
                },
                None => document.set(None),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="lead-form__grid">
            <label class="lead-form__field">
                "Full Name *"
                <input
                    class="lead-form__input"
                    class:lead-form__input--invalid=move || errors.get().get("name").is_some()
                    type="text"
                    prop:value=move || form.get().name
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit("name", &|f| f.name.clone_from(&v));
                    }
                />
                <FieldError message=error_for("name")/>
            </label>

            <label class="lead-form__field">
                {if is_update { "Email" } else { "Email *" }}
                <input
                    class="lead-form__input"
                    class:lead-form__input--invalid=move || errors.get().get("email").is_some()
                    type="email"
                    readonly=is_update
                    prop:value=move || form.get().email
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit("email", &|f| f.email.clone_from(&v));
                    }
                />
                <FieldError message=error_for("email")/>
            </label>

            <label class="lead-form__field">
                "Phone Number"
                <input
                    class="lead-form__input"
                    class:lead-form__input--invalid=move || errors.get().get("phoneNumber").is_some()
                    type="tel"
                    placeholder="+919876543210"
                    prop:value=move || form.get().phone
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit("phoneNumber", &|f| f.phone.clone_from(&v));
                    }
                />
                <FieldError message=error_for("phoneNumber")/>
            </label>

            <label class="lead-form__field">
                "Category *"
                <select
                    class="lead-form__input"
                    class:lead-form__input--invalid=move || errors.get().get("category").is_some()
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        edit("category", &|f| f.category.clone_from(&v));
                    }
                >
                    <option value="">"Select a category"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let id = c.id.clone();
                                view! {
                                    <option value=c.id selected=move || form.get().category == id>
                                        {c.title}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <FieldError message=error_for("category")/>
            </label>

            <label class="lead-form__field">
                "Position"
                <input
                    class="lead-form__input"
                    type="text"
                    prop:value=move || form.get().position
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit("position", &|f| f.position.clone_from(&v));
                    }
                />
            </label>

            <label class="lead-form__field">
                "Lead Source"
                <select
                    class="lead-form__input"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        edit("leadSource", &|f| f.lead_source.clone_from(&v));
                    }
                >
                    <option value="">"Select a source"</option>
                    {LEAD_SOURCES
                        .into_iter()
                        .map(|s| view! { <option value=s selected=move || form.get().lead_source == s>{s}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="lead-form__field">
                "Priority"
                <select
                    class="lead-form__input"
                    on:change=move |ev| {
                        if let Ok(p) = event_target_value(&ev).parse::<Priority>() {
                            form.update(|f| f.priority = p);
                        }
                    }
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option value=p.as_str() selected=move || form.get().priority == p>
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="lead-form__field">
                "Status"
                <select
                    class="lead-form__input"
                    on:change=move |ev| {
                        if let Ok(s) = event_target_value(&ev).parse::<LeadStatus>() {
                            form.update(|f| f.status = s);
                        }
                    }
                >
                    {LeadStatus::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.as_str() selected=move || form.get().status == s>
                                    {s.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <Show when=move || is_update>
                <label class="lead-form__field">
                    "Last Contact"
                    <input
                        class="lead-form__input"
                        type="date"
                        prop:value=move || {
                            form.get().last_contact.map(schema::format::format_input_date).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let day = schema::format::parse_input_date(&event_target_value(&ev)).ok();
                            form.update(|f| f.last_contact = day);
                        }
                    />
                </label>

                <label class="lead-form__field">
                    "Follow-up Dates"
                    <input
                        class="lead-form__input"
                        class:lead-form__input--invalid=move || errors.get().get("followUpDates").is_some()
                        type="text"
                        placeholder="2025-07-01, 2025-07-15"
                        prop:value=move || follow_up_text.get()
                        on:input=move |ev| {
                            follow_up_text.set(event_target_value(&ev));
                            errors.update(|e| e.clear("followUpDates"));
                        }
                    />
                    <FieldError message=error_for("followUpDates")/>
                </label>
            </Show>

            <label class="lead-form__field lead-form__field--wide">
                "Notes"
                <textarea
                    class="lead-form__textarea"
                    prop:value=move || form.get().notes
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit("notes", &|f| f.notes.clone_from(&v));
                    }
                ></textarea>
            </label>

            <label class="lead-form__field lead-form__field--wide">
                "Document"
                <input
                    class="lead-form__input"
                    type="file"
                    accept=".pdf,.doc,.docx,.xls,.xlsx"
                    on:change=on_document
                />
                <span class="lead-form__hint">
                    {move || {
                        document
                            .with(|d| d.as_ref().map(|p| format!("{} ({})", p.meta.file_name, format_file_size(p.meta.size))))
                            .unwrap_or_else(|| "PDF, DOC, or XLS up to 5MB".to_owned())
                    }}
                </span>
                <FieldError message=Signal::derive(move || document_error.get())/>
            </label>
        </div>
    }
}
