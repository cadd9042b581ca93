//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, storage,
//! files, timers, the local calendar) from page and component logic so the
//! pure parts stay testable without a browser.

pub mod auth;
pub mod clock;
pub mod cookies;
pub mod dark_mode;
pub mod file;
pub mod refresh;
