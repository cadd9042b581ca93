//! Lead assignments.
//!
//! DESIGN
//! ======
//! The backend stores assignment as a worker reference on each lead; there is
//! no separate assignment record. The board groups assigned leads by
//! category and worker into [`Assignment`] rows. A group is completed when all
//! of its leads are closed, and its due date is the earliest open follow-up.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::lead::{Lead, LeadStatus, Priority};
use crate::validate::FormErrors;

/// Progress of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignmentStatus {
    Active,
    Completed,
    Overdue,
}

impl AssignmentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }
}

/// One row of the assignment board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub id: String,
    pub category: String,
    pub status: AssignmentStatus,
    pub priority: Priority,
    pub assigned_to: String,
    pub due_date: Option<Date>,
    pub lead_count: usize,
}

impl Assignment {
    /// Status as of `today`: an active assignment past its due date is overdue.
    #[must_use]
    pub fn effective_status(&self, today: Date) -> AssignmentStatus {
        match (self.status, self.due_date) {
            (AssignmentStatus::Active, Some(due)) if due < today => AssignmentStatus::Overdue,
            (status, _) => status,
        }
    }

    /// Group assigned leads into board rows, ordered by category then worker.
    #[must_use]
    pub fn group_leads(leads: &[Lead]) -> Vec<Self> {
        let mut groups: BTreeMap<(&str, &str), Vec<&Lead>> = BTreeMap::new();
        for lead in leads {
            if let Some(worker) = lead.assigned_to.as_deref() {
                groups.entry((lead.category_title(), worker)).or_default().push(lead);
            }
        }

        groups
            .into_iter()
            .map(|((category, worker), members)| {
                let completed = members.iter().all(|l| l.status == LeadStatus::Closed);
                let priority = members.iter().map(|l| l.priority).min().unwrap_or_default();
                let due_date = members
                    .iter()
                    .filter(|l| l.status != LeadStatus::Closed)
                    .filter_map(|l| l.latest_follow_up())
                    .min();
                Self {
                    id: format!("{category}:{worker}"),
                    category: category.to_owned(),
                    status: if completed { AssignmentStatus::Completed } else { AssignmentStatus::Active },
                    priority,
                    assigned_to: worker.to_owned(),
                    due_date,
                    lead_count: members.len(),
                }
            })
            .collect()
    }
}

/// Board summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl AssignmentSummary {
    /// Count rows by their status as of `today`.
    #[must_use]
    pub fn tally(assignments: &[Assignment], today: Date) -> Self {
        assignments.iter().fold(Self::default(), |mut acc, a| {
            acc.total += 1;
            match a.effective_status(today) {
                AssignmentStatus::Active => acc.active += 1,
                AssignmentStatus::Completed => acc.completed += 1,
                AssignmentStatus::Overdue => acc.overdue += 1,
            }
            acc
        })
    }
}

/// Body of `POST /lead/assign`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignLeadsRequest {
    pub category: String,
    pub worker_id: String,
    pub lead_ids: Vec<String>,
    pub priority: Priority,
    /// `YYYY-MM-DD`.
    pub due_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl AssignLeadsRequest {
    /// Check the "New Assignment" dialog.
    ///
    /// # Errors
    ///
    /// Returns the failing fields.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.category.trim().is_empty() {
            errors.insert("category", "Please select a category");
        }
        if self.worker_id.trim().is_empty() {
            errors.insert("worker", "Please select a worker");
        }
        if self.lead_ids.is_empty() {
            errors.insert("leads", "Select at least one lead");
        }
        if crate::format::parse_input_date(&self.due_date).is_err() {
            errors.insert("dueDate", "Due date is required");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Add or remove a lead from the multi-select.
    pub fn toggle_lead(&mut self, id: &str) {
        if let Some(pos) = self.lead_ids.iter().position(|l| l == id) {
            self.lead_ids.remove(pos);
        } else {
            self.lead_ids.push(id.to_owned());
        }
    }
}
