//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of domain state so pages never need to know
//! how the shell is laid out.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the application shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Expanded sidebar with labels; collapsed shows icons only.
    pub sidebar_expanded: bool,
    /// Navbar notification tray visibility.
    pub notifications_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, sidebar_expanded: true, notifications_open: false }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }
}
