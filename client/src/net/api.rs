//! REST API helpers for the lead backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! credentials so the backend's session cookies travel with each request.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport failures, non-2xx
//! statuses, `success: false` envelopes, and undecodable bodies map to the
//! four `ApiError` variants; pages turn them into toasts or the error screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::assignment::AssignLeadsRequest;
use schema::endpoints;
use schema::lead::{CloseConversationRequest, FollowUpRequest};
use schema::validate::LeadForm;
use schema::worker::{LoginRequest, RegisterRequest};
use schema::{ApiError, Category, CategoryRequest, CurrentUser, Lead, LeadPage, Worker};

#[cfg(any(test, feature = "hydrate"))]
use schema::envelope::{unwrap_ack, unwrap_data};

use crate::util::file::PickedFile;

/// Backend base URL, fixed at build time.
#[must_use]
pub fn base_url() -> &'static str {
    option_env!("LEADFLOW_API_BASE_URL").unwrap_or(endpoints::DEFAULT_API_BASE_URL)
}

/// Absolute URL for an endpoint path.
#[must_use]
pub fn api_url(path: &str) -> String {
    endpoints::join(base_url(), path)
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Status and body of a completed exchange.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug)]
struct RawResponse {
    status: u16,
    body: String,
}

#[cfg(any(test, feature = "hydrate"))]
impl RawResponse {
    fn data<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        unwrap_data(self.status, &self.body)
    }

    fn ack(&self) -> Result<(), ApiError> {
        unwrap_ack(self.status, &self.body)
    }
}

#[cfg(feature = "hydrate")]
enum Payload {
    Empty,
    Json(serde_json::Value),
    Form(web_sys::FormData),
}

#[cfg(feature = "hydrate")]
fn json_payload<B: serde::Serialize>(body: &B) -> Result<Payload, ApiError> {
    serde_json::to_value(body)
        .map(Payload::Json)
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn dispatch(verb: Verb, path: &str, payload: Payload) -> Result<RawResponse, ApiError> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    };
    let builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .credentials(web_sys::RequestCredentials::Include);
    let request = match payload {
        Payload::Empty => builder.build(),
        Payload::Json(value) => builder.json(&value),
        Payload::Form(form) => builder.body(form),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
    log::debug!("{} {path} -> {status}", verb.as_str());
    Ok(RawResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn form_data(fields: &[(&str, String)], file: Option<(&str, &PickedFile)>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Malformed(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    if let Some((name, picked)) = file {
        form.append_with_blob_and_filename(name, &picked.file, &picked.meta.file_name)
            .map_err(js_err)?;
    }
    Ok(form)
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in as a manager. The backend sets the session cookies.
///
/// # Errors
///
/// Returns an [`ApiError`] if the credentials are rejected or the request fails.
pub async fn login_manager(body: &LoginRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, endpoints::MANAGER_LOGIN, json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Sign in as a worker.
///
/// # Errors
///
/// Returns an [`ApiError`] if the credentials are rejected or the request fails.
pub async fn login_worker(body: &LoginRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, endpoints::WORKER_LOGIN, json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Create a worker account.
///
/// # Errors
///
/// Returns an [`ApiError`] if registration is rejected or the request fails.
pub async fn register_worker(body: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, endpoints::WORKER_REGISTER, json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Fetch the signed-in user from `/user/current`.
///
/// # Errors
///
/// Returns an [`ApiError`] if no session exists or the request fails.
pub async fn fetch_current_user() -> Result<CurrentUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Get, endpoints::CURRENT_USER, Payload::Empty).await?.data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

// =============================================================================
// LEADS
// =============================================================================

/// Fetch one page of leads.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the page cannot be decoded.
pub async fn fetch_lead_page(page: u32) -> Result<LeadPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let record: schema::lead::LeadPageRecord =
            dispatch(Verb::Get, &endpoints::lead_page(page), Payload::Empty).await?.data()?;
        Ok(LeadPage::from(record))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err(server_unavailable())
    }
}

/// Fetch a single lead for the update form.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the record has no id.
pub async fn fetch_lead(id: &str) -> Result<Lead, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let record: schema::LeadRecord = dispatch(Verb::Get, &endpoints::lead(id), Payload::Empty).await?.data()?;
        Lead::from_record(record, schema::Priority::Medium)
            .ok_or_else(|| ApiError::Malformed("lead has no id".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(server_unavailable())
    }
}

/// Create a lead from a validated form, attaching `document` when present.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the lead or the request fails.
pub async fn create_lead(form: &LeadForm, document: Option<&PickedFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let fields = form.multipart_fields(schema::validate::FormMode::Create);
        let body = form_data(&fields, document.map(|d| ("documents", d)))?;
        dispatch(Verb::Post, endpoints::CREATE_LEAD, Payload::Form(body)).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, document);
        Err(server_unavailable())
    }
}

/// Save edits to an existing lead.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the update or the request fails.
pub async fn update_lead(id: &str, form: &LeadForm, document: Option<&PickedFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let fields = form.multipart_fields(schema::validate::FormMode::Update);
        let body = form_data(&fields, document.map(|d| ("documents", d)))?;
        dispatch(Verb::Put, &endpoints::update_lead(id), Payload::Form(body)).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, form, document);
        Err(server_unavailable())
    }
}

/// Delete a lead.
///
/// # Errors
///
/// Returns an [`ApiError`] if the delete is rejected or the request fails.
pub async fn delete_lead(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Delete, &endpoints::delete_lead(id), Payload::Empty).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(server_unavailable())
    }
}

/// Record a follow-up and schedule the next contact.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the follow-up or the request fails.
pub async fn add_follow_up(id: &str, body: &FollowUpRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, &endpoints::follow_up(id), json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        Err(server_unavailable())
    }
}

/// End the conversation with a lead.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the request or it fails.
pub async fn close_conversation(id: &str, body: &CloseConversationRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, &endpoints::follow_up(id), json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        Err(server_unavailable())
    }
}

/// Assign a batch of leads to a worker.
///
/// # Errors
///
/// Returns an [`ApiError`] if the assignment is rejected or the request fails.
pub async fn assign_leads(body: &AssignLeadsRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, endpoints::ASSIGN_LEADS, json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Upload a spreadsheet of leads.
///
/// # Errors
///
/// Returns an [`ApiError`] if the import is rejected or the request fails.
pub async fn bulk_upload(file: &PickedFile, fields: &[(&'static str, String)]) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form_data(fields, Some(("file", file)))?;
        dispatch(Verb::Post, endpoints::BULK_UPLOAD, Payload::Form(body)).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file, fields);
        Err(server_unavailable())
    }
}

// =============================================================================
// CATEGORIES + WORKERS
// =============================================================================

/// List all categories.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Get, endpoints::CATEGORIES, Payload::Empty).await?.data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

/// Create a category.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the category or the request fails.
pub async fn create_category(body: &CategoryRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, endpoints::CATEGORIES, json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Replace a category's title, description, and color.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the update or the request fails.
pub async fn update_category(id: &str, body: &CategoryRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Put, &endpoints::category(id), json_payload(body)?).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        Err(server_unavailable())
    }
}

/// Delete a category.
///
/// # Errors
///
/// Returns an [`ApiError`] if the delete is rejected or the request fails.
pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Delete, &endpoints::category(id), Payload::Empty).await?.ack()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(server_unavailable())
    }
}

/// List the workers leads can be assigned to.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_workers() -> Result<Vec<Worker>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Get, endpoints::WORKERS, Payload::Empty).await?.data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}
