use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::normalizer;
use crate::crm::sources::domain::{
    ContactSubmission, Lead, ProjectRequest, QuoteRequest, RecordId, UnknownStatus,
};

/// Which of the four source stores an inbox item was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Contact,
    Request,
    Quote,
    Lead,
}

impl SourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            SourceKind::Contact => "contact",
            SourceKind::Request => "request",
            SourceKind::Quote => "quote",
            SourceKind::Lead => "lead",
        }
    }
}

/// The shared four-value status vocabulary every native status collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnifiedStatus {
    New,
    InProgress,
    Converted,
    Closed,
}

impl UnifiedStatus {
    pub const fn label(self) -> &'static str {
        match self {
            UnifiedStatus::New => "new",
            UnifiedStatus::InProgress => "in_progress",
            UnifiedStatus::Converted => "converted",
            UnifiedStatus::Closed => "closed",
        }
    }
}

impl FromStr for UnifiedStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "converted" => Ok(Self::Converted),
            "closed" => Ok(Self::Closed),
            other => Err(UnknownStatus {
                vocabulary: "unified",
                value: other.to_string(),
            }),
        }
    }
}

/// The original record behind an inbox item, carried whole so detail views
/// can render source-specific fields without a second read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceRecord {
    Contact(ContactSubmission),
    Request(ProjectRequest),
    Quote(QuoteRequest),
    Lead(Lead),
}

/// One row of the unified inbox. Computed fresh on every read, never stored;
/// its identity is the (source, id) pair of the backing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxItem {
    pub id: RecordId,
    pub source: SourceKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: UnifiedStatus,
    pub created_at: DateTime<Utc>,
    pub record: SourceRecord,
}

impl InboxItem {
    pub fn from_contact(record: ContactSubmission) -> Self {
        Self {
            id: record.id.clone(),
            source: SourceKind::Contact,
            name: record.name.clone(),
            email: Some(record.email.clone()),
            status: normalizer::contact(record.status),
            created_at: record.created_at,
            record: SourceRecord::Contact(record),
        }
    }

    pub fn from_request(record: ProjectRequest) -> Self {
        Self {
            id: record.id.clone(),
            source: SourceKind::Request,
            name: record.name.clone(),
            email: Some(record.email.clone()),
            status: normalizer::request(record.status),
            created_at: record.created_at,
            record: SourceRecord::Request(record),
        }
    }

    pub fn from_quote(record: QuoteRequest) -> Self {
        Self {
            id: record.id.clone(),
            source: SourceKind::Quote,
            name: record.name.clone(),
            email: record.email.clone(),
            status: normalizer::quote(record.status),
            created_at: record.created_at,
            record: SourceRecord::Quote(record),
        }
    }

    pub fn from_lead(record: Lead) -> Self {
        Self {
            id: record.id.clone(),
            source: SourceKind::Lead,
            name: record.name.clone(),
            email: Some(record.email.clone()),
            status: normalizer::lead(record.status),
            created_at: record.created_at,
            record: SourceRecord::Lead(record),
        }
    }

    /// Case-insensitive match against the display name and email, used by
    /// the presentation layer's free-text search.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if self.name.to_lowercase().contains(&needle) {
            return true;
        }
        self.email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&needle))
    }

    pub fn to_view(&self) -> InboxItemView {
        InboxItemView {
            id: self.id.clone(),
            source: self.source.label(),
            name: self.name.clone(),
            email: self.email.clone(),
            status: self.status.label(),
            created_at: self.created_at,
            record: self.record.clone(),
        }
    }
}

/// Serialized representation of an inbox row for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct InboxItemView {
    pub id: RecordId,
    pub source: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub record: SourceRecord,
}
