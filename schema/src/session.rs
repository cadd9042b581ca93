//! Session claims derived from the browser's role cookies.
//!
//! DESIGN
//! ======
//! The backend marks a signed-in session with a cookie whose name starts with
//! `001` (worker) or `002` (manager). The cookie header is parsed exactly once
//! into a [`Session`]; UI code asks the session what it may do instead of
//! scanning cookies itself.
//!
//! When both prefixes are present the worker claim wins, so a stale manager
//! cookie never widens a worker's capabilities.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Cookie-name prefix marking a worker session.
pub const WORKER_COOKIE_PREFIX: &str = "001";
/// Cookie-name prefix marking a manager session.
pub const MANAGER_COOKIE_PREFIX: &str = "002";
/// Bearer cookie cleared on logout.
pub const TOKEN_COOKIE: &str = "token";

// =============================================================================
// ROUTES
// =============================================================================

pub const MANAGER_LOGIN_PATH: &str = "/manager/auth/login";
pub const WORKER_LOGIN_PATH: &str = "/worker/auth/login";
pub const WORKER_REGISTER_PATH: &str = "/worker/auth/register";
pub const MANAGER_DASHBOARD_PATH: &str = "/manager/dashboard";
pub const WORKER_DASHBOARD_PATH: &str = "/worker/dashboard";
pub const ALL_LEADS_PATH: &str = "/leads/all-leads";
pub const ADD_LEAD_PATH: &str = "/leads/upload-leads";
pub const BULK_UPLOAD_PATH: &str = "/leads/upload-leads-bulk";
pub const CATEGORIES_PATH: &str = "/manager/category";
pub const ASSIGNMENTS_PATH: &str = "/manager/assignment";
pub const CAMPAIGNS_PATH: &str = "/manager/campaign";

/// Update-form route for a lead.
#[must_use]
pub fn update_lead_path(id: &str) -> String {
    format!("/leads/update-leads/{id}")
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

const MANAGER_NAV: [NavItem; 7] = [
    NavItem { title: "Dashboard", href: MANAGER_DASHBOARD_PATH },
    NavItem { title: "All Leads", href: ALL_LEADS_PATH },
    NavItem { title: "Add Lead", href: ADD_LEAD_PATH },
    NavItem { title: "Bulk Lead", href: BULK_UPLOAD_PATH },
    NavItem { title: "Categories", href: CATEGORIES_PATH },
    NavItem { title: "Assignments", href: ASSIGNMENTS_PATH },
    NavItem { title: "Campaigns", href: CAMPAIGNS_PATH },
];

const WORKER_NAV: [NavItem; 4] = [
    NavItem { title: "Dashboard", href: WORKER_DASHBOARD_PATH },
    NavItem { title: "All Leads", href: ALL_LEADS_PATH },
    NavItem { title: "Add Lead", href: ADD_LEAD_PATH },
    NavItem { title: "Bulk Lead", href: BULK_UPLOAD_PATH },
];

// =============================================================================
// ROLE
// =============================================================================

/// The two UI personas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    Worker,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Worker => "worker",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Worker => "Worker",
        }
    }

    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Manager => MANAGER_LOGIN_PATH,
            Self::Worker => WORKER_LOGIN_PATH,
        }
    }

    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Manager => MANAGER_DASHBOARD_PATH,
            Self::Worker => WORKER_DASHBOARD_PATH,
        }
    }

    /// Sidebar entries for this role, in display order.
    #[must_use]
    pub fn nav_items(self) -> &'static [NavItem] {
        match self {
            Self::Manager => &MANAGER_NAV,
            Self::Worker => &WORKER_NAV,
        }
    }

    fn cookie_prefix(self) -> &'static str {
        match self {
            Self::Manager => MANAGER_COOKIE_PREFIX,
            Self::Worker => WORKER_COOKIE_PREFIX,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Self::Manager),
            "worker" => Ok(Self::Worker),
            _ => Err(ParseError::Role(s.to_owned())),
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Claims of the current browser session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
    role_cookies: Vec<String>,
}

impl Session {
    /// A session with a known role and no cookie bookkeeping. Used by the CLI
    /// and by tests.
    #[must_use]
    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role), role_cookies: Vec::new() }
    }

    /// Parse a `document.cookie` / `Cookie:` header value.
    #[must_use]
    pub fn from_cookie_header(header: &str) -> Self {
        let names: Vec<&str> = header
            .split(';')
            .filter_map(|pair| pair.split('=').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        let role = [Role::Worker, Role::Manager]
            .into_iter()
            .find(|role| names.iter().any(|name| name.starts_with(role.cookie_prefix())));
        let role_cookies = names
            .iter()
            .filter(|name| name.starts_with(WORKER_COOKIE_PREFIX) || name.starts_with(MANAGER_COOKIE_PREFIX))
            .map(|name| (*name).to_owned())
            .collect();

        Self { role, role_cookies }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    #[must_use]
    pub fn is_worker(&self) -> bool {
        self.role == Some(Role::Worker)
    }

    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.role == Some(Role::Manager)
    }

    /// Follow-up and close-conversation actions on the lead table.
    #[must_use]
    pub fn can_follow_up(&self) -> bool {
        self.is_worker()
    }

    /// The follow-up date filter on the lead table.
    #[must_use]
    pub fn can_filter_by_follow_up_date(&self) -> bool {
        self.is_worker()
    }

    /// Assignment and worker filters plus the Assigned To column on the lead
    /// table. Workers only ever see their own leads.
    #[must_use]
    pub fn tracks_assignments(&self) -> bool {
        self.is_manager()
    }

    /// The assignee dropdown on bulk upload. Hidden only for workers.
    #[must_use]
    pub fn can_choose_bulk_assignee(&self) -> bool {
        !self.is_worker()
    }

    /// Assignments, categories, and campaigns screens.
    #[must_use]
    pub fn can_manage_team(&self) -> bool {
        self.is_manager()
    }

    /// Sidebar entries; the worker menu is shown for anonymous sessions on
    /// shared lead pages.
    #[must_use]
    pub fn nav_items(&self) -> &'static [NavItem] {
        self.role.unwrap_or(Role::Worker).nav_items()
    }

    /// Login screen to land on after logout.
    #[must_use]
    pub fn login_path(&self) -> &'static str {
        self.role.unwrap_or(Role::Manager).login_path()
    }

    /// Cookie names to expire on logout: the bearer token plus every worker
    /// role cookie.
    #[must_use]
    pub fn logout_cookie_names(&self) -> Vec<String> {
        std::iter::once(TOKEN_COOKIE.to_owned())
            .chain(self.role_cookies.iter().filter(|n| n.starts_with(WORKER_COOKIE_PREFIX)).cloned())
            .collect()
    }
}

/// `document.cookie` assignment that expires `name` immediately.
#[must_use]
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}
