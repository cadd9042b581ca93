//! Signed-in user shown in the sidebar footer.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use schema::CurrentUser;
use schema::format::initials;

/// Display data for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl UserState {
    /// Name for the sidebar; empty until the profile loads.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    #[must_use]
    pub fn avatar_initials(&self) -> String {
        initials(self.display_name())
    }
}
