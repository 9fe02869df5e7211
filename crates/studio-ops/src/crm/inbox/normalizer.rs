//! Collapses each store's native status vocabulary into the shared
//! four-value one: "needs attention" maps to `new`, "actively worked" to
//! `in_progress`, a successful terminal outcome to `converted`, and an
//! unsuccessful or inactive terminal outcome to `closed`.
//!
//! Every function is pure and total. The matches are exhaustive without
//! wildcard arms so a new native status fails compilation here instead of
//! silently landing in the wrong filter bucket; raw strings are rejected at
//! the parsing boundary before they ever reach these functions.

use super::domain::UnifiedStatus;
use crate::crm::sources::domain::{ContactStatus, LeadStatus, QuoteStatus, RequestStatus};

pub const fn contact(status: ContactStatus) -> UnifiedStatus {
    match status {
        ContactStatus::New => UnifiedStatus::New,
        ContactStatus::Read => UnifiedStatus::InProgress,
        ContactStatus::Replied => UnifiedStatus::Converted,
    }
}

pub const fn request(status: RequestStatus) -> UnifiedStatus {
    match status {
        RequestStatus::New => UnifiedStatus::New,
        RequestStatus::Contacted | RequestStatus::Quoted => UnifiedStatus::InProgress,
        RequestStatus::Accepted => UnifiedStatus::Converted,
        RequestStatus::Declined => UnifiedStatus::Closed,
    }
}

// The quote vocabulary has no successful terminal value; a won quote is
// re-entered by the admin as a lead or project, so `closed` stays `closed`.
pub const fn quote(status: QuoteStatus) -> UnifiedStatus {
    match status {
        QuoteStatus::New => UnifiedStatus::New,
        QuoteStatus::Contacted | QuoteStatus::Quoted => UnifiedStatus::InProgress,
        QuoteStatus::Closed => UnifiedStatus::Closed,
    }
}

pub const fn lead(status: LeadStatus) -> UnifiedStatus {
    match status {
        LeadStatus::New => UnifiedStatus::New,
        LeadStatus::Contacted | LeadStatus::Qualified => UnifiedStatus::InProgress,
        LeadStatus::Converted => UnifiedStatus::Converted,
        LeadStatus::Lost => UnifiedStatus::Closed,
    }
}
