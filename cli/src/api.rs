//! Blocking-free REST client for the lead backend.
//!
//! Requests carry the session cookies captured by `leadflow login` in a
//! `Cookie` header; responses are unwrapped from the `{ success, data }`
//! envelope the same way the browser client does it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use schema::envelope::{unwrap_ack, unwrap_data};
use schema::lead::LeadPageRecord;
use schema::validate::{DocumentMeta, mime_for_file_name, validate_document};
use schema::worker::{LoginRequest, RegisterRequest};
use schema::{ApiError, Category, CurrentUser, Lead, LeadPage, LeadRecord, Priority, Role, Worker, endpoints};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CliError;

/// A file read from disk for a multipart upload.
#[derive(Clone, Debug)]
pub struct Upload {
    pub meta: DocumentMeta,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Read `path` and describe it the way a browser file input would.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when the file cannot be read.
    pub async fn read(path: &str) -> Result<Self, CliError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CliError::Io { path: path.to_owned(), source })?;
        let file_name = std::path::Path::new(path)
            .file_name()
            .map_or_else(|| path.to_owned(), |n| n.to_string_lossy().into_owned());
        let mime = mime_for_file_name(&file_name).to_owned();
        Ok(Self { meta: DocumentMeta { file_name, size: u64::try_from(bytes.len()).unwrap_or(u64::MAX), mime }, bytes })
    }

    fn part(&self) -> Result<Part, CliError> {
        Ok(Part::bytes(self.bytes.clone()).file_name(self.meta.file_name.clone()).mime_str(&self.meta.mime)?)
    }
}

/// Collect `name=value` pairs from `Set-Cookie` headers into one `Cookie`
/// header value.
#[must_use]
pub fn cookie_header<'a>(set_cookies: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let pairs: Vec<&str> = set_cookies
        .into_iter()
        .filter_map(|raw| raw.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('=') && !pair.starts_with('='))
        .collect();
    (!pairs.is_empty()).then(|| pairs.join("; "))
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the cookie is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, cookie: Option<&str>) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie.filter(|c| !c.trim().is_empty()) {
            headers.insert(COOKIE, HeaderValue::from_str(cookie.trim())?);
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "request");
        self.http.request(method, url)
    }

    async fn send(request: RequestBuilder) -> Result<(u16, String), CliError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "response");
        Ok((status, body))
    }

    async fn data<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CliError> {
        let (status, body) = Self::send(request).await?;
        Ok(unwrap_data(status, &body)?)
    }

    async fn ack(request: RequestBuilder) -> Result<(), CliError> {
        let (status, body) = Self::send(request).await?;
        Ok(unwrap_ack(status, &body)?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), CliError> {
        Self::ack(self.request(Method::POST, path).json(body)).await
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Sign in and return the `Cookie` header value for later calls.
    ///
    /// # Errors
    ///
    /// Returns the backend failure, or [`CliError::MissingSessionCookie`]
    /// when the response set no cookies.
    pub async fn login(&self, role: Role, body: &LoginRequest) -> Result<String, CliError> {
        let path = match role {
            Role::Manager => endpoints::MANAGER_LOGIN,
            Role::Worker => endpoints::WORKER_LOGIN,
        };
        let response = self.request(Method::POST, path).json(body).send().await?;
        let status = response.status().as_u16();
        let cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
            .collect();
        let text = response.text().await?;
        unwrap_ack(status, &text)?;
        cookie_header(cookies.iter().map(String::as_str)).ok_or(CliError::MissingSessionCookie)
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn register(&self, body: &RegisterRequest) -> Result<(), CliError> {
        self.post_json(endpoints::WORKER_REGISTER, body).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn current_user(&self) -> Result<CurrentUser, CliError> {
        Self::data(self.request(Method::GET, endpoints::CURRENT_USER)).await
    }

    // =========================================================================
    // LEADS
    // =========================================================================

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn lead_page(&self, page: u32) -> Result<LeadPage, CliError> {
        let record: LeadPageRecord = Self::data(self.request(Method::GET, &endpoints::lead_page(page))).await?;
        Ok(record.into())
    }

    /// # Errors
    ///
    /// Returns the backend failure, or a malformed error when the record has
    /// no id.
    pub async fn lead(&self, id: &str) -> Result<Lead, CliError> {
        let record: LeadRecord = Self::data(self.request(Method::GET, &endpoints::lead(id))).await?;
        Lead::from_record(record, Priority::Medium)
            .ok_or_else(|| CliError::Api(ApiError::Malformed("lead has no id".to_owned())))
    }

    fn lead_form(fields: Vec<(&'static str, String)>, document: Option<&Upload>) -> Result<Form, CliError> {
        let mut form = fields.into_iter().fold(Form::new(), |form, (name, value)| form.text(name, value));
        if let Some(upload) = document {
            validate_document(&upload.meta).map_err(|m| CliError::Invalid(m.to_owned()))?;
            form = form.part("documents", upload.part()?);
        }
        Ok(form)
    }

    /// # Errors
    ///
    /// Returns the backend failure or an invalid document.
    pub async fn create_lead(&self, fields: Vec<(&'static str, String)>, document: Option<&Upload>) -> Result<(), CliError> {
        let form = Self::lead_form(fields, document)?;
        Self::ack(self.request(Method::POST, endpoints::CREATE_LEAD).multipart(form)).await
    }

    /// # Errors
    ///
    /// Returns the backend failure or an invalid document.
    pub async fn update_lead(
        &self,
        id: &str,
        fields: Vec<(&'static str, String)>,
        document: Option<&Upload>,
    ) -> Result<(), CliError> {
        let form = Self::lead_form(fields, document)?;
        Self::ack(self.request(Method::PUT, &endpoints::update_lead(id)).multipart(form)).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete_lead(&self, id: &str) -> Result<(), CliError> {
        Self::ack(self.request(Method::DELETE, &endpoints::delete_lead(id))).await
    }

    /// Post a follow-up or close-conversation body.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn follow_up<B: Serialize>(&self, id: &str, body: &B) -> Result<(), CliError> {
        self.post_json(&endpoints::follow_up(id), body).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn assign(&self, body: &schema::AssignLeadsRequest) -> Result<(), CliError> {
        self.post_json(endpoints::ASSIGN_LEADS, body).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn bulk_upload(&self, upload: &Upload, fields: Vec<(&'static str, String)>) -> Result<(), CliError> {
        let form = fields
            .into_iter()
            .fold(Form::new().part("file", upload.part()?), |form, (name, value)| form.text(name, value));
        Self::ack(self.request(Method::POST, endpoints::BULK_UPLOAD).multipart(form)).await
    }

    // =========================================================================
    // CATEGORIES + WORKERS
    // =========================================================================

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn categories(&self) -> Result<Vec<Category>, CliError> {
        Self::data(self.request(Method::GET, endpoints::CATEGORIES)).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn create_category(&self, body: &schema::CategoryRequest) -> Result<(), CliError> {
        self.post_json(endpoints::CATEGORIES, body).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn update_category(&self, id: &str, body: &schema::CategoryRequest) -> Result<(), CliError> {
        Self::ack(self.request(Method::PUT, &endpoints::category(id)).json(body)).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete_category(&self, id: &str) -> Result<(), CliError> {
        Self::ack(self.request(Method::DELETE, &endpoints::category(id))).await
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn workers(&self) -> Result<Vec<Worker>, CliError> {
        Self::data(self.request(Method::GET, endpoints::WORKERS)).await
    }
}
