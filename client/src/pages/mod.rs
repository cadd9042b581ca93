//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, dialogs, submit
//! flows) and delegates rendering details to `components`.

pub mod add_lead;
pub mod all_leads;
pub mod assignments;
pub mod bulk_upload;
pub mod campaigns;
pub mod categories;
pub mod home;
pub mod login;
pub mod manager_dashboard;
pub mod register;
pub mod update_lead;
pub mod worker_dashboard;
