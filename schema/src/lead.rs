//! Leads: wire records, the typed view the UI works with, and follow-up payloads.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: `phoneNumber` may be a string or a
//! number, `category` and `assignedTo` may be populated or a bare id, ids
//! arrive as `_id` or `id`, enum fields may be missing, and strings or arrays
//! may be sent as `null`. [`LeadRecord`] accepts all of that;
//! [`Lead::from_record`] resolves it once into a strict value, so filters and
//! tables never see the raw JSON.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

use crate::category::{CategoryRef, UNCATEGORIZED_COLOR, UNCATEGORIZED_TITLE};
use crate::error::ParseError;
use crate::format::{format_day_month_year, parse_timestamp};

/// Pipeline position of a lead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    New,
    InProgress,
    FollowUp,
    Closed,
}

impl LeadStatus {
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::FollowUp, Self::Closed];

    /// Wire value (`in-progress`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::FollowUp => "follow-up",
            Self::Closed => "closed",
        }
    }

    /// Human label (`In Progress`, ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::FollowUp => "Follow Up",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "new" => Ok(Self::New),
            "in-progress" => Ok(Self::InProgress),
            "follow-up" => Ok(Self::FollowUp),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseError::Status(s.to_owned())),
        }
    }
}

/// Lead urgency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseError::Priority(s.to_owned())),
        }
    }
}

// =============================================================================
// WIRE RECORDS
// =============================================================================

/// `category` on a lead: populated object or bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Populated(CategoryRef),
    Id(String),
}

/// Populated `assignedTo` on a lead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTo {
    #[serde(default)]
    pub name: Option<String>,
}

/// `assignedTo` on a lead: populated worker or bare worker id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssigneeField {
    Populated(AssignedTo),
    Id(String),
}

impl AssigneeField {
    /// Label for the assignee. A bare id stands in for the name, since the
    /// lead is still taken.
    fn into_label(self) -> Option<String> {
        match self {
            Self::Populated(worker) => worker.name,
            Self::Id(id) => Some(id),
        }
    }
}

/// A lead exactly as the backend sends it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "phoneNumber", deserialize_with = "deserialize_phone")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, rename = "leadSource")]
    pub lead_source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryField>,
    #[serde(default, rename = "assignedTo")]
    pub assigned_to: Option<AssigneeField>,
    #[serde(default, rename = "followUpDates", deserialize_with = "null_as_default")]
    pub follow_up_dates: Vec<String>,
    #[serde(default, rename = "lastContact")]
    pub last_contact: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<String>,
}

impl LeadRecord {
    /// Identifier, whichever of `id`/`_id` the endpoint used.
    #[must_use]
    pub fn resolved_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.mongo_id.as_deref()).filter(|id| !id.is_empty())
    }
}

/// `data` of `GET /lead/getalllead`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPageRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub leads: Vec<LeadRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Page position of a lead listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1, total_pages: 1 }
    }
}

impl Pagination {
    #[must_use]
    pub fn has_previous(self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_phone<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

// =============================================================================
// TYPED VIEW
// =============================================================================

/// A lead after boundary validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub lead_source: Option<String>,
    pub notes: Option<String>,
    pub status: LeadStatus,
    pub priority: Priority,
    /// Populated category, when the endpoint expanded it.
    pub category: Option<CategoryRef>,
    /// Category id regardless of population.
    pub category_id: Option<String>,
    /// Assigned worker name; `None` means unassigned.
    pub assigned_to: Option<String>,
    pub follow_up_dates: Vec<Date>,
    pub last_contact: Option<Date>,
    pub created_at: Option<Date>,
    pub documents: Vec<String>,
}

impl Lead {
    /// Resolve a wire record. `default_priority` applies when the backend
    /// omitted or garbled the field (list rows use `Low`, forms `Medium`).
    ///
    /// Returns `None` for records without an id, which cannot be edited or
    /// deleted and are dropped from listings.
    #[must_use]
    pub fn from_record(record: LeadRecord, default_priority: Priority) -> Option<Self> {
        let id = record.resolved_id()?.to_owned();
        let status = record
            .status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let priority = record
            .priority
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_priority);
        let (category, category_id) = match record.category {
            Some(CategoryField::Populated(cat)) => {
                let id = (!cat.id.is_empty()).then(|| cat.id.clone());
                (Some(cat), id)
            }
            Some(CategoryField::Id(id)) if !id.is_empty() => (None, Some(id)),
            _ => (None, None),
        };
        let assigned_to = record
            .assigned_to
            .and_then(AssigneeField::into_label)
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty() && name != UNASSIGNED_LABEL);
        let follow_up_dates = record.follow_up_dates.iter().filter_map(|s| parse_timestamp(s)).collect();

        Some(Self {
            id,
            name: record.name,
            email: non_blank(record.email),
            phone: record.phone_number,
            position: non_blank(record.position),
            lead_source: non_blank(record.lead_source),
            notes: non_blank(record.notes),
            status,
            priority,
            category,
            category_id,
            assigned_to,
            follow_up_dates,
            last_contact: record.last_contact.as_deref().and_then(parse_timestamp),
            created_at: record.created_at.as_deref().and_then(parse_timestamp),
            documents: record.documents,
        })
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Most recently scheduled follow-up.
    #[must_use]
    pub fn latest_follow_up(&self) -> Option<Date> {
        self.follow_up_dates.last().copied()
    }

    #[must_use]
    pub fn position_label(&self) -> &str {
        self.position.as_deref().unwrap_or("Unknown Position")
    }

    #[must_use]
    pub fn email_label(&self) -> &str {
        self.email.as_deref().unwrap_or("No Email")
    }

    #[must_use]
    pub fn phone_label(&self) -> &str {
        self.phone.as_deref().unwrap_or("No Phone Number")
    }

    #[must_use]
    pub fn assignee_label(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or(UNASSIGNED_LABEL)
    }

    #[must_use]
    pub fn category_title(&self) -> &str {
        self.category.as_ref().map_or(UNCATEGORIZED_TITLE, |c| c.title.as_str())
    }

    #[must_use]
    pub fn category_color(&self) -> &str {
        self.category.as_ref().map_or(UNCATEGORIZED_COLOR, |c| c.color.as_str())
    }

    /// Last-contact column: explicit contact date, else creation date.
    #[must_use]
    pub fn last_contact_label(&self) -> String {
        self.last_contact.or(self.created_at).map(format_day_month_year).unwrap_or_default()
    }

    #[must_use]
    pub fn follow_up_label(&self) -> String {
        self.latest_follow_up().map(format_day_month_year).unwrap_or_default()
    }
}

/// Label shown for leads with no assignee.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A decoded page of leads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadPage {
    pub leads: Vec<Lead>,
    pub pagination: Pagination,
}

impl From<LeadPageRecord> for LeadPage {
    fn from(record: LeadPageRecord) -> Self {
        let leads = record
            .leads
            .into_iter()
            .filter_map(|r| Lead::from_record(r, Priority::Low))
            .collect();
        Self { leads, pagination: record.pagination }
    }
}

// =============================================================================
// FOLLOW-UP PAYLOADS
// =============================================================================

/// Body of `POST /lead/{id}/follow-up` when scheduling the next contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRequest {
    /// `YYYY-MM-DD`.
    pub follow_up_date: String,
    pub conclusion: String,
}

/// How a closed conversation ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationOutcome {
    #[default]
    Positive,
    Negative,
}

impl FromStr for ConversationOutcome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            _ => Err(ParseError::Outcome(s.to_owned())),
        }
    }
}

/// Body of `POST /lead/{id}/follow-up` when ending the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseConversationRequest {
    pub is_profitable: bool,
    pub conclusion: String,
}

impl CloseConversationRequest {
    #[must_use]
    pub fn new(outcome: ConversationOutcome, conclusion: &str) -> Self {
        Self {
            is_profitable: outcome == ConversationOutcome::Positive,
            conclusion: conclusion.trim().to_owned(),
        }
    }
}
