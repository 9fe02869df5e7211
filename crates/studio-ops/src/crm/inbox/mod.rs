//! The unified inbox: a read-only projection that tags every record from
//! the four submission stores with its source, collapses its native status
//! into the shared four-value vocabulary, and returns one list for the
//! admin screens to filter and render.

pub mod aggregator;
pub mod domain;
pub mod normalizer;
pub mod router;

#[cfg(test)]
mod tests;

pub use aggregator::{sort_newest_first, InboxAggregator};
pub use domain::{InboxItem, InboxItemView, SourceKind, SourceRecord, UnifiedStatus};
pub use router::inbox_router;
