use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::crm::sources::domain::{
    ContactForm, ContactSubmission, Lead, NewLead, ProjectRecord, ProjectRequest, QuoteRequest,
    QuoteRequestForm, RecordId,
};
use crate::crm::sources::repository::{
    ContactStore, LeadStore, ProjectStore, QuoteStore, RequestStore, StoreError,
};
use crate::crm::sources::service::IntakeService;
use crate::crm::sources::LeadSource;

#[derive(Default, Clone)]
pub(super) struct MemoryContactStore {
    records: Arc<Mutex<HashMap<RecordId, ContactSubmission>>>,
}

impl ContactStore for MemoryContactStore {
    fn insert(&self, record: ContactSubmission) -> Result<ContactSubmission, StoreError> {
        let mut guard = self.records.lock().expect("contact mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ContactSubmission) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("contact mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<ContactSubmission>, StoreError> {
        let guard = self.records.lock().expect("contact mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let guard = self.records.lock().expect("contact mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRequestStore {
    records: Arc<Mutex<HashMap<RecordId, ProjectRequest>>>,
}

impl RequestStore for MemoryRequestStore {
    fn insert(&self, record: ProjectRequest) -> Result<ProjectRequest, StoreError> {
        let mut guard = self.records.lock().expect("request mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProjectRequest) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("request mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<ProjectRequest>, StoreError> {
        let guard = self.records.lock().expect("request mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<ProjectRequest>, StoreError> {
        let guard = self.records.lock().expect("request mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryQuoteStore {
    records: Arc<Mutex<HashMap<RecordId, QuoteRequest>>>,
}

impl QuoteStore for MemoryQuoteStore {
    fn insert(&self, record: QuoteRequest) -> Result<QuoteRequest, StoreError> {
        let mut guard = self.records.lock().expect("quote mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: QuoteRequest) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("quote mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<QuoteRequest>, StoreError> {
        let guard = self.records.lock().expect("quote mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<QuoteRequest>, StoreError> {
        let guard = self.records.lock().expect("quote mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLeadStore {
    records: Arc<Mutex<HashMap<RecordId, Lead>>>,
}

impl LeadStore for MemoryLeadStore {
    fn insert(&self, record: Lead) -> Result<Lead, StoreError> {
        let mut guard = self.records.lock().expect("lead mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: Lead) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("lead mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<Lead>, StoreError> {
        let guard = self.records.lock().expect("lead mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Lead>, StoreError> {
        let guard = self.records.lock().expect("lead mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryProjectStore {
    records: Arc<Mutex<HashMap<RecordId, ProjectRecord>>>,
}

impl ProjectStore for MemoryProjectStore {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError> {
        let mut guard = self.records.lock().expect("project mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let guard = self.records.lock().expect("project mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct TestStores {
    pub(super) contacts: Arc<MemoryContactStore>,
    pub(super) requests: Arc<MemoryRequestStore>,
    pub(super) quotes: Arc<MemoryQuoteStore>,
    pub(super) leads: Arc<MemoryLeadStore>,
    pub(super) projects: Arc<MemoryProjectStore>,
}

pub(super) type TestService = IntakeService<
    MemoryContactStore,
    MemoryRequestStore,
    MemoryQuoteStore,
    MemoryLeadStore,
    MemoryProjectStore,
>;

impl TestStores {
    pub(super) fn service(&self) -> TestService {
        IntakeService::new(
            self.contacts.clone(),
            self.requests.clone(),
            self.quotes.clone(),
            self.leads.clone(),
            self.projects.clone(),
        )
    }
}

pub(super) fn stores() -> TestStores {
    TestStores {
        contacts: Arc::new(MemoryContactStore::default()),
        requests: Arc::new(MemoryRequestStore::default()),
        quotes: Arc::new(MemoryQuoteStore::default()),
        leads: Arc::new(MemoryLeadStore::default()),
        projects: Arc::new(MemoryProjectStore::default()),
    }
}

pub(super) fn contact_form() -> ContactForm {
    ContactForm {
        name: "Ada Marsh".to_string(),
        email: "ada@northpine.studio".to_string(),
        service: "web design".to_string(),
        message: "We need a refresh of our gallery site.".to_string(),
    }
}

pub(super) fn quote_form() -> QuoteRequestForm {
    QuoteRequestForm {
        name: "Bo Reyes".to_string(),
        phone: "515-555-0117".to_string(),
        email: None,
        service_type: "virtual tour".to_string(),
        issue_type: "new capture".to_string(),
        property_type: "retail".to_string(),
        zip_code: "50309".to_string(),
        description: Some("Two-floor showroom".to_string()),
    }
}

pub(super) fn new_lead() -> NewLead {
    NewLead {
        name: "Cleo Tran".to_string(),
        email: "cleo@trancreative.co".to_string(),
        company: Some("Tran Creative".to_string()),
        phone: None,
        source: LeadSource::Referral,
        notes: "Asked about VR showroom pricing.".to_string(),
        last_contacted_at: None,
    }
}
