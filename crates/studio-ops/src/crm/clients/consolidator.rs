use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{fill_optional, ClientSummary};
use crate::crm::sources::repository::{
    ContactStore, LeadStore, ProjectStore, RequestStore, StoreError,
};

/// Folds projects, leads, project requests, and contact submissions into
/// per-email client summaries.
///
/// Fold order is fixed (projects, then leads, then requests, then contacts,
/// store-natural order within each), which is what makes "prefer the first
/// non-empty value" well-defined for the optional fields. Quote requests are
/// left out: their email is optional and email is the identity key here.
/// Reads carry the same all-or-nothing, no-snapshot semantics as the inbox.
pub struct ClientDirectory<P, L, R, C> {
    projects: Arc<P>,
    leads: Arc<L>,
    requests: Arc<R>,
    contacts: Arc<C>,
}

impl<P, L, R, C> ClientDirectory<P, L, R, C>
where
    P: ProjectStore + 'static,
    L: LeadStore + 'static,
    R: RequestStore + 'static,
    C: ContactStore + 'static,
{
    pub fn new(projects: Arc<P>, leads: Arc<L>, requests: Arc<R>, contacts: Arc<C>) -> Self {
        Self {
            projects,
            leads,
            requests,
            contacts,
        }
    }

    pub fn consolidate(&self) -> Result<Vec<ClientSummary>, StoreError> {
        let mut rows: Vec<ClientSummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        let entry = |rows: &mut Vec<ClientSummary>,
                     index: &mut HashMap<String, usize>,
                     email: &str,
                     seen_at: DateTime<Utc>|
         -> usize {
            if let Some(&slot) = index.get(email) {
                rows[slot].touch(seen_at);
                return slot;
            }
            let slot = rows.len();
            rows.push(ClientSummary::seed(email.to_string(), seen_at));
            index.insert(email.to_string(), slot);
            slot
        };

        for project in self.projects.list_all()? {
            let slot = entry(&mut rows, &mut index, &project.client_email, project.created_at);
            let row = &mut rows[slot];
            row.touch(project.last_activity_at);
            row.fill_name(&project.client_name);
            row.project_ids.push(project.id);
        }

        for lead in self.leads.list_all()? {
            let slot = entry(&mut rows, &mut index, &lead.email, lead.created_at);
            let row = &mut rows[slot];
            if let Some(contacted) = lead.last_contacted_at {
                row.touch(contacted);
            }
            row.fill_name(&lead.name);
            fill_optional(&mut row.phone, lead.phone.as_deref());
            fill_optional(&mut row.company, lead.company.as_deref());
            row.lead_ids.push(lead.id);
        }

        for request in self.requests.list_all()? {
            let slot = entry(&mut rows, &mut index, &request.email, request.created_at);
            let row = &mut rows[slot];
            row.fill_name(&request.name);
            fill_optional(&mut row.company, request.business_name.as_deref());
            row.request_ids.push(request.id);
        }

        for contact in self.contacts.list_all()? {
            let slot = entry(&mut rows, &mut index, &contact.email, contact.created_at);
            let row = &mut rows[slot];
            row.fill_name(&contact.name);
            row.contact_ids.push(contact.id);
        }

        Ok(rows)
    }
}

/// Most recently active clients first; ties broken by email so repeated
/// reads render identically.
pub fn sort_by_recent_activity(rows: &mut [ClientSummary]) {
    rows.sort_by(|a, b| {
        b.last_activity
            .cmp(&a.last_activity)
            .then_with(|| a.email.cmp(&b.email))
    });
}
