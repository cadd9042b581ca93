//! Form validation shared by the browser forms and the CLI.
//!
//! Each validator returns either the request body ready to send or a
//! [`FormErrors`] dictionary keyed by field name, which the UI renders inline.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use time::Date;

use crate::category::CategoryRequest;
use crate::error::ParseError;
use crate::format::{format_input_date, parse_input_date};
use crate::lead::{FollowUpRequest, Lead, LeadStatus, Priority};
use crate::worker::{LoginRequest, RegisterRequest};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern compiles"));
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("color pattern compiles"));

/// Largest attachment accepted on a lead.
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for lead attachments.
pub const ALLOWED_DOCUMENT_TYPES: [&str; 5] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Field name -> message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_owned(), message.into());
    }

    /// Drop a field's error, as happens when the user edits that field.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone numbers are checked with all whitespace removed.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(phone))
}

// =============================================================================
// LEAD FORM
// =============================================================================

/// Which lead form is being submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Email is locked on update and therefore not validated or sent.
    Update,
}

/// Editable lead fields, as typed into the create/update forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub position: String,
    pub lead_source: String,
    pub notes: String,
    pub priority: Priority,
    pub status: LeadStatus,
    pub follow_up_dates: Vec<Date>,
    pub last_contact: Option<Date>,
}

impl LeadForm {
    /// Prefill the update form from a fetched lead.
    #[must_use]
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone().unwrap_or_default(),
            phone: lead.phone.clone().unwrap_or_default(),
            category: lead.category_id.clone().unwrap_or_default(),
            position: lead.position.clone().unwrap_or_default(),
            lead_source: lead.lead_source.clone().unwrap_or_default(),
            notes: lead.notes.clone().unwrap_or_default(),
            priority: lead.priority,
            status: lead.status,
            follow_up_dates: lead.follow_up_dates.clone(),
            last_contact: lead.last_contact,
        }
    }

    /// Check the form.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self, mode: FormMode) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Full name is required");
        } else if name.chars().count() < 2 {
            errors.insert("name", "Name must be at least 2 characters");
        }

        if mode == FormMode::Create {
            let email = self.email.trim();
            if email.is_empty() {
                errors.insert("email", "Email is required");
            } else if !is_valid_email(email) {
                errors.insert("email", "Please enter a valid email address");
            }
        }

        if self.category.trim().is_empty() {
            errors.insert("category", "Please select a category");
        }

        if !self.phone.trim().is_empty() && !is_valid_phone(&self.phone) {
            errors.insert("phoneNumber", "Please enter a valid phone number");
        }

        errors.into_result(())
    }

    /// Multipart text fields for `POST /lead/createlead` or `PUT /lead/updateleads/{id}`.
    #[must_use]
    pub fn multipart_fields(&self, mode: FormMode) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.trim().to_owned())];
        if mode == FormMode::Create {
            fields.push(("email", self.email.trim().to_owned()));
        }
        fields.extend([
            ("phoneNumber", normalize_phone(&self.phone)),
            ("category", self.category.clone()),
            ("position", self.position.trim().to_owned()),
            ("leadSource", self.lead_source.trim().to_owned()),
            ("notes", self.notes.clone()),
            ("status", self.status.as_str().to_owned()),
            ("priority", self.priority.as_str().to_owned()),
        ]);
        if mode == FormMode::Update {
            if let Some(day) = self.last_contact {
                fields.push(("lastContact", midnight_utc(day)));
            }
            if !self.follow_up_dates.is_empty() {
                let iso: Vec<String> = self.follow_up_dates.iter().copied().map(midnight_utc).collect();
                fields.push(("followUpDates", serde_json::Value::from(iso).to_string()));
            }
        }
        fields
    }
}

fn midnight_utc(day: Date) -> String {
    format!("{}T00:00:00.000Z", format_input_date(day))
}

/// Parse the update form's comma-separated follow-up list.
///
/// # Errors
///
/// Returns the first entry that is not a `YYYY-MM-DD` date.
pub fn parse_follow_up_list(raw: &str) -> Result<Vec<Date>, ParseError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_input_date)
        .collect()
}

/// Render follow-up dates back into the comma-separated input.
#[must_use]
pub fn format_follow_up_list(dates: &[Date]) -> String {
    dates.iter().copied().map(format_input_date).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// What the browser or filesystem tells us about a chosen attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMeta {
    pub file_name: String,
    pub size: u64,
    pub mime: String,
}

/// Check an attachment against the size and type limits.
///
/// # Errors
///
/// Returns the message shown under the file input.
pub fn validate_document(doc: &DocumentMeta) -> Result<(), &'static str> {
    if doc.size > MAX_DOCUMENT_BYTES {
        return Err("File size must be less than 5MB");
    }
    if !ALLOWED_DOCUMENT_TYPES.contains(&doc.mime.as_str()) {
        return Err("Please upload a PDF, DOC, or XLS file");
    }
    Ok(())
}

/// MIME type for a local file, from its extension.
#[must_use]
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

// =============================================================================
// DIALOGS + AUTH
// =============================================================================

/// Validate the "Add follow-up" dialog. The date may not be in the past.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_follow_up(date: &str, conclusion: &str, today: Date) -> Result<FollowUpRequest, FormErrors> {
    let mut errors = FormErrors::new();
    match parse_input_date(date) {
        Ok(day) if day < today => errors.insert("date", "Follow-up date cannot be in the past"),
        Ok(_) => {}
        Err(_) => errors.insert("date", "Follow-up date is required"),
    }
    if conclusion.trim().is_empty() {
        errors.insert("conclusion", "Conclusion is required");
    }
    errors.into_result(FollowUpRequest {
        follow_up_date: date.trim().to_owned(),
        conclusion: conclusion.trim().to_owned(),
    })
}

/// Validate a manager or worker login form.
///
/// # Errors
///
/// Returns the toast message for missing credentials.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and Password are required");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the worker registration form. Optional fields are dropped when blank.
///
/// # Errors
///
/// Returns the toast message for the first problem.
pub fn validate_register(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    avatar: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and Password are required");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address");
    }
    let optional = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        first_name: optional(first_name),
        last_name: optional(last_name),
        avatar: optional(avatar),
    })
}

/// Validate the category editor.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_category(title: &str, description: &str, color: &str) -> Result<CategoryRequest, FormErrors> {
    let mut errors = FormErrors::new();
    if title.trim().is_empty() {
        errors.insert("title", "Title is required");
    }
    if !HEX_COLOR_RE.is_match(color.trim()) {
        errors.insert("color", "Color must look like #4f46e5");
    }
    errors.into_result(CategoryRequest {
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        color: color.trim().to_ascii_lowercase(),
    })
}
