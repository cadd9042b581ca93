//! Lead-table state for the all-leads screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `pages::all_leads` and refreshed on mount, on page change, and on
//! the background refresh tick. Filtering is applied at render time over the
//! current page so switching filters never refetches.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch keeps the previous rows and records the message in `error`;
//! the page only switches to the error screen when no rows were ever loaded.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use schema::filter::worker_options;
use schema::{Lead, LeadFilter, LeadPage, Pagination};

/// Rows, pagination, and filter controls for the lead table.
#[derive(Clone, Debug, Default)]
pub struct LeadsState {
    /// Leads of the current page, in server order.
    pub items: Vec<Lead>,
    pub pagination: Pagination,
    /// Page requested but not yet loaded.
    pub requested_page: u32,
    /// True while a page fetch is in flight.
    pub loading: bool,
    /// True once any page has loaded successfully.
    pub loaded: bool,
    pub error: Option<String>,
    pub filter: LeadFilter,
    /// Lead awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Lead whose follow-up dialog is open.
    pub follow_up_target: Option<String>,
}

impl LeadsState {
    /// Mark a fetch of `page` as started.
    pub fn begin_load(&mut self, page: u32) {
        self.requested_page = page.max(1);
        self.loading = true;
    }

    /// Install a freshly fetched page.
    pub fn replace_page(&mut self, page: LeadPage) {
        self.items = page.leads;
        self.pagination = page.pagination;
        self.requested_page = self.pagination.current_page;
        self.loading = false;
        self.loaded = true;
        self.error = None;
    }

    /// Record a failed fetch, keeping whatever rows were already shown.
    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Whether the page should render the full-screen error instead of the table.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.loaded && self.error.is_some()
    }

    /// Apply the outcome of a delete request. Rows only leave the table
    /// after the backend confirmed the delete.
    pub fn finish_delete<E>(&mut self, id: &str, outcome: &Result<(), E>) -> bool {
        if self.pending_delete.as_deref() == Some(id) {
            self.pending_delete = None;
        }
        if outcome.is_err() {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|lead| lead.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Lead> {
        self.items.iter().find(|lead| lead.id == id)
    }

    /// Rows surviving the current filter.
    #[must_use]
    pub fn visible(&self) -> Vec<Lead> {
        self.filter.apply(&self.items).into_iter().cloned().collect()
    }

    /// Options for the worker dropdown.
    #[must_use]
    pub fn worker_choices(&self) -> Vec<String> {
        worker_options(&self.items)
    }

    /// Next page to fetch, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.pagination.has_next().then(|| self.pagination.current_page + 1)
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        self.pagination.has_previous().then(|| self.pagination.current_page - 1)
    }
}
