//! `leads watch`: poll a lead page on an interval and report what changed.
//!
//! The terminal counterpart of the browser table's background refresh. The
//! first poll runs immediately; later polls follow the interval, and a failed
//! poll is logged without ending the watch.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use schema::{Lead, LeadStatus};
use tokio::time::MissedTickBehavior;

use crate::CliError;

/// Differences between two polls of the same page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDelta {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    /// `(name, from, to)` for leads whose status moved.
    pub status_changed: Vec<(String, LeadStatus, LeadStatus)>,
}

impl LeadDelta {
    #[must_use]
    pub fn between(previous: &[Lead], current: &[Lead]) -> Self {
        let before: BTreeMap<&str, &Lead> = previous.iter().map(|l| (l.id.as_str(), l)).collect();
        let after: BTreeMap<&str, &Lead> = current.iter().map(|l| (l.id.as_str(), l)).collect();

        let mut delta = Self::default();
        for (id, lead) in &after {
            match before.get(id) {
                None => delta.added.push(lead.name.clone()),
                Some(old) if old.status != lead.status => {
                    delta.status_changed.push((lead.name.clone(), old.status, lead.status));
                }
                Some(_) => {}
            }
        }
        for (id, lead) in &before {
            if !after.contains_key(id) {
                delta.removed.push(lead.name.clone());
            }
        }
        delta
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.status_changed.is_empty()
    }

    /// One line per change.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let added = self.added.iter().map(|n| format!("+ {n}"));
        let removed = self.removed.iter().map(|n| format!("- {n}"));
        let moved = self.status_changed.iter().map(|(n, from, to)| format!("~ {n}: {from} -> {to}"));
        added.chain(removed).chain(moved).collect()
    }
}

/// Call `poll` every `interval` until `max_polls` polls have run (forever
/// when `None`). Returns the number of polls.
pub async fn run<F, Fut>(interval: Duration, max_polls: Option<u32>, mut poll: F) -> u32
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<(), CliError>>,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut polls = 0;
    while max_polls.is_none_or(|max| polls < max) {
        ticker.tick().await;
        if let Err(e) = poll(polls).await {
            tracing::warn!(error = %e, poll = polls, "lead poll failed");
        }
        polls += 1;
    }
    polls
}
