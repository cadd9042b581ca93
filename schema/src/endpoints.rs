//! REST paths, relative to the API base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.lead.indibus.net/api/v1";

pub const CREATE_LEAD: &str = "/lead/createlead";
pub const ASSIGN_LEADS: &str = "/lead/assign";
pub const BULK_UPLOAD: &str = "/lead/bulk-upload";
pub const CATEGORIES: &str = "/category/";
pub const WORKERS: &str = "/worker/get-all-workers";
pub const CURRENT_USER: &str = "/user/current";
pub const MANAGER_LOGIN: &str = "/manager/login";
pub const WORKER_LOGIN: &str = "/worker/login";
pub const WORKER_REGISTER: &str = "/worker/register";

#[must_use]
pub fn lead_page(page: u32) -> String {
    format!("/lead/getalllead?page={}", page.max(1))
}

#[must_use]
pub fn lead(id: &str) -> String {
    format!("/lead/getlead/{id}")
}

#[must_use]
pub fn update_lead(id: &str) -> String {
    format!("/lead/updateleads/{id}")
}

#[must_use]
pub fn delete_lead(id: &str) -> String {
    format!("/lead/deletelead/{id}")
}

/// Follow-up scheduling and conversation closing share this path.
#[must_use]
pub fn follow_up(id: &str) -> String {
    format!("/lead/{id}/follow-up")
}

#[must_use]
pub fn category(id: &str) -> String {
    format!("/category/{id}")
}

/// Join a base URL and a path without doubling or dropping the slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
