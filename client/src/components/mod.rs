//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome (sidebar, navbar, toasts), the
//! lead table and its dialogs, and dashboard cards, reading and writing
//! shared state from Leptos context providers.

pub mod app_shell;
pub mod badge;
pub mod campaign_card;
pub mod confirm_dialog;
pub mod dashboard_panels;
pub mod error_screen;
pub mod field_error;
pub mod follow_up_dialog;
pub mod kpi_card;
pub mod lead_form_fields;
pub mod lead_table;
pub mod navbar;
pub mod new_assignment_dialog;
pub mod page_controls;
pub mod sidebar;
pub mod toast_stack;
