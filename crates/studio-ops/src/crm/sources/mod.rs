//! The four independently owned submission stores (contact messages,
//! project requests, quick quotes, sales leads) plus the client project
//! collection, and the intake service that writes to them. Each store keeps
//! its own status vocabulary; collapsing them into one is the inbox's job,
//! not the stores'.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactForm, ContactStatus, ContactSubmission, Lead, LeadSource, LeadStatus, NewLead,
    NewProject, ProjectRecord, ProjectRequest, ProjectRequestForm, ProjectStatus, QuoteRequest,
    QuoteRequestForm, QuoteStatus, RecordId, RequestStatus, UnknownStatus,
};
pub use repository::{
    ContactStore, LeadStore, ProjectStore, QuoteStore, RequestStore, StoreError,
};
pub use router::intake_router;
pub use service::{IntakeError, IntakeService};
