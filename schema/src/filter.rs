//! Client-side lead filtering for the lead table.
//!
//! DESIGN
//! ======
//! Filters run over the current page only; the backend paginates but does not
//! filter. Stages apply in a fixed order: assignment, worker, search term,
//! follow-up date. A worker filter combined with `Unassigned` can never match
//! and yields nothing.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use time::Date;

use crate::lead::Lead;

/// Assignment-state dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    #[default]
    All,
    Assigned,
    Unassigned,
}

impl AssignmentFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Assigned, Self::Unassigned];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Assigned => "Assigned",
            Self::Unassigned => "Unassigned",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label().eq_ignore_ascii_case(label.trim()))
    }

    fn admits(self, lead: &Lead) -> bool {
        match self {
            Self::All => true,
            Self::Assigned => lead.is_assigned(),
            Self::Unassigned => !lead.is_assigned(),
        }
    }
}

/// Worker dropdown: everyone, or one worker by display name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WorkerFilter {
    #[default]
    All,
    Named(String),
}

impl WorkerFilter {
    /// Dropdown value `All` maps to [`WorkerFilter::All`]; anything else names a worker.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        if choice.is_empty() || choice == "All" {
            Self::All
        } else {
            Self::Named(choice.to_owned())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }
}

/// Every filter control on the lead table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub search: String,
    pub assignment: AssignmentFilter,
    pub worker: WorkerFilter,
    /// Only honored when the session may filter by date.
    pub follow_up_on: Option<Date>,
}

impl LeadFilter {
    /// Change the assignment filter. Picking `Unassigned` clears a worker
    /// selection, which could no longer match anything.
    pub fn set_assignment(&mut self, assignment: AssignmentFilter) {
        self.assignment = assignment;
        if assignment == AssignmentFilter::Unassigned {
            self.worker = WorkerFilter::All;
        }
    }

    /// Whether any control differs from its default.
    #[must_use]
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Whether `lead` survives every stage.
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        if !self.assignment.admits(lead) {
            return false;
        }
        if let WorkerFilter::Named(name) = &self.worker {
            if self.assignment == AssignmentFilter::Unassigned {
                return false;
            }
            if lead.assigned_to.as_deref() != Some(name.as_str()) {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !search_haystacks(lead).any(|h| h.to_lowercase().contains(&needle)) {
            return false;
        }
        if let Some(day) = self.follow_up_on {
            if lead.latest_follow_up() != Some(day) {
                return false;
            }
        }
        true
    }

    /// Leads passing the filter, in input order.
    #[must_use]
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}

fn search_haystacks(lead: &Lead) -> impl Iterator<Item = &str> {
    [Some(lead.name.as_str()), lead.position.as_deref(), lead.email.as_deref()]
        .into_iter()
        .flatten()
}

/// Worker dropdown options: `All` followed by the sorted, distinct assignee
/// names present in `leads`.
#[must_use]
pub fn worker_options(leads: &[Lead]) -> Vec<String> {
    let names: BTreeSet<&str> = leads.iter().filter_map(|l| l.assigned_to.as_deref()).collect();
    std::iter::once("All".to_owned())
        .chain(names.into_iter().map(ToOwned::to_owned))
        .collect()
}
