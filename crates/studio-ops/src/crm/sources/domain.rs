use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper shared by every source record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Raised when a raw status string does not belong to the named vocabulary.
///
/// Unknown statuses are data drift, not user input to be tolerated; they must
/// surface as errors instead of defaulting into the wrong filter bucket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} status '{value}'")]
pub struct UnknownStatus {
    pub vocabulary: &'static str,
    pub value: String,
}

/// Lifecycle of a general contact-form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            other => Err(UnknownStatus {
                vocabulary: "contact",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle of a "start a project" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    Contacted,
    Quoted,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::Contacted => "contacted",
            RequestStatus::Quoted => "quoted",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "quoted" => Ok(Self::Quoted),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(UnknownStatus {
                vocabulary: "request",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle of a quick-quote widget submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    New,
    Contacted,
    Quoted,
    Closed,
}

impl QuoteStatus {
    pub const fn label(self) -> &'static str {
        match self {
            QuoteStatus::New => "new",
            QuoteStatus::Contacted => "contacted",
            QuoteStatus::Quoted => "quoted",
            QuoteStatus::Closed => "closed",
        }
    }
}

impl FromStr for QuoteStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "quoted" => Ok(Self::Quoted),
            "closed" => Ok(Self::Closed),
            other => Err(UnknownStatus {
                vocabulary: "quote",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle of a manually tracked sales lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "converted" => Ok(Self::Converted),
            "lost" => Ok(Self::Lost),
            other => Err(UnknownStatus {
                vocabulary: "lead",
                value: other.to_string(),
            }),
        }
    }
}

/// Marketing channel a lead came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    Referral,
    Social,
    Outreach,
    Event,
    Import,
    Other,
}

impl LeadSource {
    pub const fn label(self) -> &'static str {
        match self {
            LeadSource::Website => "website",
            LeadSource::Referral => "referral",
            LeadSource::Social => "social",
            LeadSource::Outreach => "outreach",
            LeadSource::Event => "event",
            LeadSource::Import => "import",
            LeadSource::Other => "other",
        }
    }
}

/// Delivery state of a client project tracked for the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Delivered,
    Archived,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Delivered => "delivered",
            ProjectStatus::Archived => "archived",
        }
    }
}

/// A message from the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// A long-form "start a project" request from the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub project_types: Vec<String>,
    pub description: String,
    pub timeline: String,
    pub budget: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

/// A short-form price-quote request from the quick-quote widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub service_type: String,
    pub issue_type: String,
    pub property_type: String,
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// A sales lead entered by hand in the admin screens or imported from CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub source: LeadSource,
    pub notes: String,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted_at: Option<DateTime<Utc>>,
}

/// A client project, read by the roster only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: RecordId,
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

/// Payload of the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

/// Payload of the public "start a project" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequestForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub project_types: Vec<String>,
    pub description: String,
    pub timeline: String,
    pub budget: String,
}

/// Payload of the public quick-quote widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequestForm {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub service_type: String,
    pub issue_type: String,
    pub property_type: String,
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Admin payload for manual lead entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub source: LeadSource,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted_at: Option<DateTime<Utc>>,
}

/// Admin payload for registering a client project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub client_name: String,
    pub client_email: String,
}
