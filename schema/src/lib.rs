//! Shared typed contract for the lead-management REST boundary.
//!
//! This crate owns the representation used by both `client` (browser UI) and
//! `cli`. JSON returned by the backend is decoded into wire records here and
//! converted to typed views once, so callers never match loose field names.
//!
//! Besides the entities, the crate holds the small amount of behavior the UI
//! derives locally: lead/campaign filtering, form validation, role claims,
//! dashboard aggregation, and bulk-upload previews. Everything is pure and
//! runs identically in WASM and native builds.

pub mod assignment;
pub mod bulk;
pub mod campaign;
pub mod category;
pub mod dashboard;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod format;
pub mod lead;
pub mod session;
pub mod validate;
pub mod worker;

pub use assignment::{AssignLeadsRequest, Assignment, AssignmentStatus, AssignmentSummary};
pub use campaign::{Campaign, CampaignBook, CampaignFilter, CampaignKind, CampaignStats, CampaignStatus};
pub use category::{Category, CategoryRef, CategoryRequest};
pub use envelope::ApiEnvelope;
pub use error::{ApiError, ParseError};
pub use filter::{AssignmentFilter, LeadFilter, WorkerFilter};
pub use lead::{Lead, LeadPage, LeadRecord, LeadStatus, Pagination, Priority};
pub use session::{NavItem, Role, Session};
pub use validate::FormErrors;
pub use worker::{CurrentUser, Worker};

/// Interval between automatic lead-list refreshes.
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10 * 60);
