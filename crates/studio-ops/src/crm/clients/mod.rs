//! The client roster: an email-keyed consolidation of projects, leads,
//! project requests, and contact submissions into per-client summaries.
//! Unlike the inbox, records sharing an email ARE merged here, by exact
//! string equality with no normalization.

pub mod consolidator;
pub mod domain;
pub mod router;

pub use consolidator::{sort_by_recent_activity, ClientDirectory};
pub use domain::ClientSummary;
pub use router::client_router;
