//! Outbound email/SMS campaigns.
//!
//! DESIGN
//! ======
//! Campaigns have no backend endpoint. [`CampaignBook`] is the in-memory store
//! the campaign screen mutates: sending a draft and deleting are local edits,
//! seeded from [`CampaignBook::seeded`].

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

use crate::error::ParseError;

/// Delivery channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignKind {
    Email,
    Sms,
}

impl CampaignKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
        }
    }
}

impl FromStr for CampaignKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(ParseError::Campaign { field: "type", value: s.to_owned() }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Sent,
}

impl CampaignStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
        }
    }
}

impl FromStr for CampaignStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            _ => Err(ParseError::Campaign { field: "status", value: s.to_owned() }),
        }
    }
}

/// A lead targeted by a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecipient {
    pub id: u32,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: CampaignKind,
    pub category: String,
    pub status: CampaignStatus,
    pub sent_count: u32,
    pub total_count: u32,
    /// Percent, 0-100.
    pub open_rate: f64,
    pub created_by: String,
    pub created_at: Date,
    pub last_sent: Option<Date>,
    /// Recipient ids.
    pub leads: Vec<u32>,
}

impl Campaign {
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status == CampaignStatus::Draft
    }

    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Search box plus the status and type dropdowns. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub search: String,
    pub status: Option<CampaignStatus>,
    pub kind: Option<CampaignKind>,
}

impl CampaignFilter {
    #[must_use]
    pub fn matches(&self, campaign: &Campaign) -> bool {
        campaign.matches_search(&self.search.trim().to_lowercase())
            && self.status.is_none_or(|s| s == campaign.status)
            && self.kind.is_none_or(|k| k == campaign.kind)
    }
}

/// Overview stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampaignStats {
    pub total: usize,
    pub sent: usize,
    pub drafts: usize,
    /// Sum of `sent_count` over sent campaigns.
    pub messages_sent: u32,
    /// Sum of `total_count` over every campaign.
    pub recipients: u32,
    pub email: usize,
    pub sms: usize,
}

/// Local campaign store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignBook {
    campaigns: Vec<Campaign>,
    recipients: Vec<CampaignRecipient>,
}

impl CampaignBook {
    #[must_use]
    pub fn new(campaigns: Vec<Campaign>, recipients: Vec<CampaignRecipient>) -> Self {
        Self { campaigns, recipients }
    }

    /// Starter campaigns shown before any real campaign exists.
    #[must_use]
    pub fn seeded() -> Self {
        let recipients = [
            (1, "John Doe", "john@example.com"),
            (2, "Jane Smith", "jane@example.com"),
            (3, "Bob Johnson", "bob@example.com"),
            (4, "Alice Brown", "alice@example.com"),
            (5, "Charlie Davis", "charlie@example.com"),
        ]
        .into_iter()
        .map(|(id, name, email)| CampaignRecipient { id, name: name.to_owned(), email: email.to_owned() })
        .collect();

        let campaigns = vec![
            Campaign {
                id: 1,
                title: "Welcome Email Campaign".to_owned(),
                description: "Welcome to Our SCM Solutions".to_owned(),
                kind: CampaignKind::Email,
                category: "Welcome".to_owned(),
                status: CampaignStatus::Sent,
                sent_count: 25,
                total_count: 25,
                open_rate: 72.0,
                created_by: "John Manager".to_owned(),
                created_at: date!(2024 - 01 - 20),
                last_sent: Some(date!(2024 - 01 - 20)),
                leads: vec![1, 2, 3, 4, 5],
            },
            Campaign {
                id: 2,
                title: "Follow-up SMS Campaign".to_owned(),
                description: "Hi! This is a follow-up regarding our SCM discussion...".to_owned(),
                kind: CampaignKind::Sms,
                category: "Follow-up".to_owned(),
                status: CampaignStatus::Sent,
                sent_count: 15,
                total_count: 15,
                open_rate: 85.0,
                created_by: "Alice Johnson".to_owned(),
                created_at: date!(2024 - 01 - 19),
                last_sent: Some(date!(2024 - 01 - 19)),
                leads: vec![1, 3, 5],
            },
            Campaign {
                id: 3,
                title: "Product Demo Invitation".to_owned(),
                description: "Exclusive Demo Invitation - SCM Platform".to_owned(),
                kind: CampaignKind::Email,
                category: "Demo".to_owned(),
                status: CampaignStatus::Draft,
                sent_count: 0,
                total_count: 30,
                open_rate: 0.0,
                created_by: "Bob Davis".to_owned(),
                created_at: date!(2024 - 01 - 18),
                last_sent: None,
                leads: vec![1, 2, 3, 4, 5],
            },
        ];
        Self { campaigns, recipients }
    }

    #[must_use]
    pub fn all(&self) -> &[Campaign] {
        &self.campaigns
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn filtered(&self, filter: &CampaignFilter) -> Vec<&Campaign> {
        self.campaigns.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Recipients of a campaign, in recipient-list order.
    #[must_use]
    pub fn recipients_of(&self, id: u32) -> Vec<&CampaignRecipient> {
        let Some(campaign) = self.get(id) else {
            return Vec::new();
        };
        self.recipients.iter().filter(|r| campaign.leads.contains(&r.id)).collect()
    }

    /// Send a draft. Returns `false` when the id is unknown or already sent.
    pub fn mark_sent(&mut self, id: u32, today: Date) -> bool {
        match self.campaigns.iter_mut().find(|c| c.id == id) {
            Some(campaign) if campaign.is_draft() => {
                campaign.status = CampaignStatus::Sent;
                campaign.sent_count = campaign.total_count;
                campaign.last_sent = Some(today);
                true
            }
            _ => false,
        }
    }

    /// Delete a campaign, returning it when it existed.
    pub fn remove(&mut self, id: u32) -> Option<Campaign> {
        let pos = self.campaigns.iter().position(|c| c.id == id)?;
        Some(self.campaigns.remove(pos))
    }

    #[must_use]
    pub fn stats(&self) -> CampaignStats {
        self.campaigns.iter().fold(CampaignStats::default(), |mut acc, c| {
            acc.total += 1;
            acc.recipients += c.total_count;
            match c.status {
                CampaignStatus::Sent => {
                    acc.sent += 1;
                    acc.messages_sent += c.sent_count;
                }
                CampaignStatus::Draft => acc.drafts += 1,
            }
            match c.kind {
                CampaignKind::Email => acc.email += 1,
                CampaignKind::Sms => acc.sms += 1,
            }
            acc
        })
    }
}
