use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    ContactForm, ContactStatus, ContactSubmission, Lead, LeadStatus, NewLead, NewProject,
    ProjectRecord, ProjectRequest, ProjectRequestForm, ProjectStatus, QuoteRequest,
    QuoteRequestForm, QuoteStatus, RecordId, RequestStatus,
};
use super::repository::{
    ContactStore, LeadStore, ProjectStore, QuoteStore, RequestStore, StoreError,
};

/// Service facade composing the five source stores behind the intake and
/// admin screens.
pub struct IntakeService<C, R, Q, L, P> {
    contacts: Arc<C>,
    requests: Arc<R>,
    quotes: Arc<Q>,
    leads: Arc<L>,
    projects: Arc<P>,
}

static CONTACT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static QUOTE_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PROJECT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str, sequence: &AtomicU64) -> RecordId {
    let id = sequence.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("{prefix}-{id:06}"))
}

fn require(field: &'static str, value: &str) -> Result<(), IntakeError> {
    if value.trim().is_empty() {
        return Err(IntakeError::MissingField(field));
    }
    Ok(())
}

impl<C, R, Q, L, P> IntakeService<C, R, Q, L, P>
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    pub fn new(
        contacts: Arc<C>,
        requests: Arc<R>,
        quotes: Arc<Q>,
        leads: Arc<L>,
        projects: Arc<P>,
    ) -> Self {
        Self {
            contacts,
            requests,
            quotes,
            leads,
            projects,
        }
    }

    /// Store a contact-form message with a fresh id and `new` status.
    pub fn submit_contact(&self, form: ContactForm) -> Result<ContactSubmission, IntakeError> {
        require("name", &form.name)?;
        require("email", &form.email)?;

        let record = ContactSubmission {
            id: next_id("ct", &CONTACT_SEQUENCE),
            name: form.name,
            email: form.email,
            service: form.service,
            message: form.message,
            status: ContactStatus::New,
            created_at: Utc::now(),
        };

        Ok(self.contacts.insert(record)?)
    }

    /// Store a "start a project" request with a fresh id and `new` status.
    pub fn submit_request(&self, form: ProjectRequestForm) -> Result<ProjectRequest, IntakeError> {
        require("name", &form.name)?;
        require("email", &form.email)?;

        let record = ProjectRequest {
            id: next_id("pr", &REQUEST_SEQUENCE),
            name: form.name,
            email: form.email,
            business_name: form.business_name,
            project_types: form.project_types,
            description: form.description,
            timeline: form.timeline,
            budget: form.budget,
            status: RequestStatus::New,
            created_at: Utc::now(),
        };

        Ok(self.requests.insert(record)?)
    }

    /// Store a quick-quote request. The widget collects a phone number rather
    /// than requiring an email.
    pub fn submit_quote(&self, form: QuoteRequestForm) -> Result<QuoteRequest, IntakeError> {
        require("name", &form.name)?;
        require("phone", &form.phone)?;

        let record = QuoteRequest {
            id: next_id("qr", &QUOTE_SEQUENCE),
            name: form.name,
            phone: form.phone,
            email: form.email,
            service_type: form.service_type,
            issue_type: form.issue_type,
            property_type: form.property_type,
            zip_code: form.zip_code,
            description: form.description,
            status: QuoteStatus::New,
            created_at: Utc::now(),
        };

        Ok(self.quotes.insert(record)?)
    }

    /// Register a manually entered sales lead.
    pub fn create_lead(&self, new: NewLead) -> Result<Lead, IntakeError> {
        require("name", &new.name)?;
        require("email", &new.email)?;

        let record = Lead {
            id: next_id("ld", &LEAD_SEQUENCE),
            name: new.name,
            email: new.email,
            company: new.company,
            phone: new.phone,
            source: new.source,
            notes: new.notes,
            status: LeadStatus::New,
            created_at: Utc::now(),
            last_contacted_at: new.last_contacted_at,
        };

        Ok(self.leads.insert(record)?)
    }

    /// Register leads in bulk, e.g. from a spreadsheet import. Returns the
    /// number stored; the first store failure aborts the batch.
    pub fn import_leads(&self, batch: Vec<NewLead>) -> Result<usize, IntakeError> {
        let mut imported = 0;
        for lead in batch {
            self.create_lead(lead)?;
            imported += 1;
        }
        Ok(imported)
    }

    /// Register a client project for the roster.
    pub fn create_project(&self, new: NewProject) -> Result<ProjectRecord, IntakeError> {
        require("title", &new.title)?;
        require("client_email", &new.client_email)?;

        let now = Utc::now();
        let record = ProjectRecord {
            id: next_id("prj", &PROJECT_SEQUENCE),
            title: new.title,
            client_name: new.client_name,
            client_email: new.client_email,
            status: ProjectStatus::Planning,
            created_at: now,
            last_activity_at: now,
        };

        Ok(self.projects.insert(record)?)
    }

    pub fn set_contact_status(
        &self,
        id: &RecordId,
        status: ContactStatus,
    ) -> Result<ContactSubmission, IntakeError> {
        let mut record = self.contacts.fetch(id)?.ok_or(StoreError::NotFound)?;
        record.status = status;
        self.contacts.update(record.clone())?;
        Ok(record)
    }

    pub fn set_request_status(
        &self,
        id: &RecordId,
        status: RequestStatus,
    ) -> Result<ProjectRequest, IntakeError> {
        let mut record = self.requests.fetch(id)?.ok_or(StoreError::NotFound)?;
        record.status = status;
        self.requests.update(record.clone())?;
        Ok(record)
    }

    pub fn set_quote_status(
        &self,
        id: &RecordId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, IntakeError> {
        let mut record = self.quotes.fetch(id)?.ok_or(StoreError::NotFound)?;
        record.status = status;
        self.quotes.update(record.clone())?;
        Ok(record)
    }

    /// Moving a lead to `contacted` also refreshes its outreach timestamp.
    pub fn set_lead_status(&self, id: &RecordId, status: LeadStatus) -> Result<Lead, IntakeError> {
        let mut record = self.leads.fetch(id)?.ok_or(StoreError::NotFound)?;
        record.status = status;
        if status == LeadStatus::Contacted {
            record.last_contacted_at = Some(Utc::now());
        }
        self.leads.update(record.clone())?;
        Ok(record)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}
