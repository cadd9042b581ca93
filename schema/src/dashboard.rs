//! Dashboard aggregation and badge styling.
//!
//! KPIs are computed from whatever page of leads the dashboard fetched. Trend
//! deltas are display data supplied by the caller.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeMap;

use time::Date;

use crate::assignment::AssignmentStatus;
use crate::campaign::CampaignStatus;
use crate::lead::{Lead, LeadStatus, Priority};

/// Counts derived from a set of leads as of `today`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadKpis {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub follow_up: usize,
    pub closed: usize,
    /// Closed / total, in percent; zero for an empty set.
    pub conversion_rate: f64,
    /// Open leads whose latest follow-up is today.
    pub due_today: usize,
    /// Open leads whose latest follow-up has passed.
    pub overdue: usize,
    /// Open leads with no follow-up scheduled.
    pub missing_follow_up: usize,
    /// Lead counts per category title, largest first, ties by title.
    pub by_category: Vec<(String, usize)>,
}

impl LeadKpis {
    #[must_use]
    pub fn compute(leads: &[Lead], today: Date) -> Self {
        let mut kpis = Self { total: leads.len(), ..Self::default() };
        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();

        for lead in leads {
            match lead.status {
                LeadStatus::New => kpis.new += 1,
                LeadStatus::InProgress => kpis.in_progress += 1,
                LeadStatus::FollowUp => kpis.follow_up += 1,
                LeadStatus::Closed => kpis.closed += 1,
            }
            *categories.entry(lead.category_title()).or_default() += 1;

            if lead.status == LeadStatus::Closed {
                continue;
            }
            match lead.latest_follow_up() {
                Some(day) if day == today => kpis.due_today += 1,
                Some(day) if day < today => kpis.overdue += 1,
                Some(_) => {}
                None => kpis.missing_follow_up += 1,
            }
        }

        if kpis.total > 0 {
            kpis.conversion_rate = percent(kpis.closed, kpis.total);
        }
        let mut by_category: Vec<(String, usize)> =
            categories.into_iter().map(|(title, n)| (title.to_owned(), n)).collect();
        by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        kpis.by_category = by_category;
        kpis
    }

    /// Leads actively being worked.
    #[must_use]
    pub fn engaged(&self) -> usize {
        self.in_progress + self.follow_up
    }

    /// Status funnel in pipeline order.
    #[must_use]
    pub fn funnel(&self) -> [(LeadStatus, usize); 4] {
        [
            (LeadStatus::New, self.new),
            (LeadStatus::FollowUp, self.follow_up),
            (LeadStatus::InProgress, self.in_progress),
            (LeadStatus::Closed, self.closed),
        ]
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> f64 {
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Per-worker row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerScore {
    pub name: String,
    pub assigned: usize,
    pub converted: usize,
}

/// Assigned and closed counts per worker, most conversions first.
#[must_use]
pub fn worker_leaderboard(leads: &[Lead]) -> Vec<WorkerScore> {
    let mut scores: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for lead in leads {
        if let Some(name) = lead.assigned_to.as_deref() {
            let entry = scores.entry(name).or_default();
            entry.0 += 1;
            if lead.status == LeadStatus::Closed {
                entry.1 += 1;
            }
        }
    }
    let mut rows: Vec<WorkerScore> = scores
        .into_iter()
        .map(|(name, (assigned, converted))| WorkerScore { name: name.to_owned(), assigned, converted })
        .collect();
    rows.sort_by(|a, b| b.converted.cmp(&a.converted).then_with(|| b.assigned.cmp(&a.assigned)));
    rows
}

/// Open leads with a follow-up on or after `today`, soonest first.
#[must_use]
pub fn upcoming_follow_ups(leads: &[Lead], today: Date, limit: usize) -> Vec<(&Lead, Date)> {
    let mut rows: Vec<(&Lead, Date)> = leads
        .iter()
        .filter(|l| l.status != LeadStatus::Closed)
        .filter_map(|l| l.latest_follow_up().map(|d| (l, d)))
        .filter(|(_, d)| *d >= today)
        .collect();
    rows.sort_by_key(|(_, d)| *d);
    rows.truncate(limit);
    rows
}

/// Most recently created leads, newest first. Leads without a creation date
/// sort last.
#[must_use]
pub fn recent_leads(leads: &[Lead], limit: usize) -> Vec<&Lead> {
    let mut rows: Vec<&Lead> = leads.iter().collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows.truncate(limit);
    rows
}

/// KPI change indicator: `▲ 12%` or `▼ 3%`.
#[must_use]
pub fn format_change(change: f64) -> String {
    let arrow = if change >= 0.0 { '▲' } else { '▼' };
    format!("{arrow} {}%", change.abs())
}

// =============================================================================
// BADGES
// =============================================================================

/// Badge modifier class for a lead status (`badge--in-progress`, ...).
#[must_use]
pub fn status_badge_class(status: LeadStatus) -> String {
    format!("badge--{}", status.as_str())
}

#[must_use]
pub fn priority_badge_class(priority: Priority) -> String {
    format!("badge--{}", priority.as_str())
}

#[must_use]
pub fn assignment_badge_class(status: AssignmentStatus) -> String {
    format!("badge--{}", status.label().to_ascii_lowercase())
}

#[must_use]
pub fn campaign_badge_class(status: CampaignStatus) -> String {
    format!("badge--{}", status.label().to_ascii_lowercase())
}
