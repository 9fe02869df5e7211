use std::sync::Arc;

use super::domain::InboxItem;
use crate::crm::sources::repository::{
    ContactStore, LeadStore, QuoteStore, RequestStore, StoreError,
};

/// Read-only projection of the four submission stores into one list.
///
/// The four reads are independent; there is no cross-store transaction, so
/// a record mutated between two reads may appear with either status. That
/// staleness is accepted and resolved by the next refresh. Records sharing
/// an email are deliberately NOT merged here: two submissions from the same
/// person are two separate work items (unlike the client roster, which does
/// merge by email).
pub struct InboxAggregator<C, R, Q, L> {
    contacts: Arc<C>,
    requests: Arc<R>,
    quotes: Arc<Q>,
    leads: Arc<L>,
}

impl<C, R, Q, L> InboxAggregator<C, R, Q, L>
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
{
    pub fn new(contacts: Arc<C>, requests: Arc<R>, quotes: Arc<Q>, leads: Arc<L>) -> Self {
        Self {
            contacts,
            requests,
            quotes,
            leads,
        }
    }

    /// Produce one inbox item per record across all four stores.
    ///
    /// Output is grouped by source in a fixed order (contacts, requests,
    /// quotes, leads) with no further ordering guarantee; callers that need
    /// newest-first must sort, e.g. via [`sort_newest_first`]. If any one
    /// store read fails the whole aggregation fails; there is no partial
    /// result.
    pub fn aggregate(&self) -> Result<Vec<InboxItem>, StoreError> {
        let contacts = self.contacts.list_all()?;
        let requests = self.requests.list_all()?;
        let quotes = self.quotes.list_all()?;
        let leads = self.leads.list_all()?;

        let mut items =
            Vec::with_capacity(contacts.len() + requests.len() + quotes.len() + leads.len());
        items.extend(contacts.into_iter().map(InboxItem::from_contact));
        items.extend(requests.into_iter().map(InboxItem::from_request));
        items.extend(quotes.into_iter().map(InboxItem::from_quote));
        items.extend(leads.into_iter().map(InboxItem::from_lead));

        Ok(items)
    }
}

/// Newest-first ordering for presentation, ties broken by source and id so
/// repeated reads render identically.
pub fn sort_newest_first(items: &mut [InboxItem]) {
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.source.label().cmp(b.source.label()))
            .then_with(|| a.id.0.cmp(&b.id.0))
    });
}
