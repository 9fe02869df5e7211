use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::crm::sources::domain::RecordId;

/// Per-client summary built by folding the email-keyed stores.
///
/// Identity is the raw email string, compared exactly: no case folding,
/// aliasing, or typo correction. A client who writes in from two different
/// addresses is two roster rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<RecordId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lead_ids: Vec<RecordId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub request_ids: Vec<RecordId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_ids: Vec<RecordId>,
    pub first_seen: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl ClientSummary {
    pub(crate) fn seed(email: String, seen_at: DateTime<Utc>) -> Self {
        Self {
            email,
            name: String::new(),
            phone: None,
            company: None,
            project_ids: Vec::new(),
            lead_ids: Vec::new(),
            request_ids: Vec::new(),
            contact_ids: Vec::new(),
            first_seen: seen_at,
            last_activity: seen_at,
        }
    }

    /// Widen the first-seen/last-activity window to include `moment`.
    pub(crate) fn touch(&mut self, moment: DateTime<Utc>) {
        if moment < self.first_seen {
            self.first_seen = moment;
        }
        if moment > self.last_activity {
            self.last_activity = moment;
        }
    }

    /// Keep the first non-empty name encountered in fold order.
    pub(crate) fn fill_name(&mut self, candidate: &str) {
        if self.name.trim().is_empty() && !candidate.trim().is_empty() {
            self.name = candidate.to_string();
        }
    }

    pub fn related_records(&self) -> usize {
        self.project_ids.len() + self.lead_ids.len() + self.request_ids.len()
            + self.contact_ids.len()
    }
}

/// Keep the first non-empty value encountered in fold order.
pub(crate) fn fill_optional(slot: &mut Option<String>, candidate: Option<&str>) {
    if slot.is_some() {
        return;
    }
    if let Some(value) = candidate {
        if !value.trim().is_empty() {
            *slot = Some(value.to_string());
        }
    }
}
