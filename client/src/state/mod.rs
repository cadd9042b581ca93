//! Client-side state containers provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each module is a plain `Default` struct wrapped in an `RwSignal` by the
//! owning page or by `app::App`. Mutations are methods on the struct so they
//! can be unit-tested without a reactive runtime.

pub mod auth;
pub mod leads;
pub mod notifications;
pub mod toasts;
pub mod ui;
pub mod user;
