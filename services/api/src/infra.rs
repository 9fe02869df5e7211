use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use studio_ops::crm::clients::ClientDirectory;
use studio_ops::crm::inbox::InboxAggregator;
use studio_ops::crm::sources::{
    ContactStore, ContactSubmission, IntakeService, Lead, LeadStore, ProjectRecord, ProjectStore,
    ProjectRequest, QuoteRequest, QuoteStore, RecordId, RequestStore, StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryContactStore {
    records: Arc<Mutex<HashMap<RecordId, ContactSubmission>>>,
}

impl ContactStore for InMemoryContactStore {
    fn insert(&self, record: ContactSubmission) -> Result<ContactSubmission, StoreError> {
        let mut guard = self.records.lock().expect("contact store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ContactSubmission) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("contact store mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<ContactSubmission>, StoreError> {
        let guard = self.records.lock().expect("contact store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let guard = self.records.lock().expect("contact store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRequestStore {
    records: Arc<Mutex<HashMap<RecordId, ProjectRequest>>>,
}

impl RequestStore for InMemoryRequestStore {
    fn insert(&self, record: ProjectRequest) -> Result<ProjectRequest, StoreError> {
        let mut guard = self.records.lock().expect("request store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProjectRequest) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("request store mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<ProjectRequest>, StoreError> {
        let guard = self.records.lock().expect("request store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<ProjectRequest>, StoreError> {
        let guard = self.records.lock().expect("request store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryQuoteStore {
    records: Arc<Mutex<HashMap<RecordId, QuoteRequest>>>,
}

impl QuoteStore for InMemoryQuoteStore {
    fn insert(&self, record: QuoteRequest) -> Result<QuoteRequest, StoreError> {
        let mut guard = self.records.lock().expect("quote store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: QuoteRequest) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("quote store mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<QuoteRequest>, StoreError> {
        let guard = self.records.lock().expect("quote store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<QuoteRequest>, StoreError> {
        let guard = self.records.lock().expect("quote store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadStore {
    records: Arc<Mutex<HashMap<RecordId, Lead>>>,
}

impl LeadStore for InMemoryLeadStore {
    fn insert(&self, record: Lead) -> Result<Lead, StoreError> {
        let mut guard = self.records.lock().expect("lead store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: Lead) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("lead store mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<Lead>, StoreError> {
        let guard = self.records.lock().expect("lead store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Lead>, StoreError> {
        let guard = self.records.lock().expect("lead store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProjectStore {
    records: Arc<Mutex<HashMap<RecordId, ProjectRecord>>>,
}

impl ProjectStore for InMemoryProjectStore {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError> {
        let mut guard = self.records.lock().expect("project store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let guard = self.records.lock().expect("project store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(crate) type Service = IntakeService<
    InMemoryContactStore,
    InMemoryRequestStore,
    InMemoryQuoteStore,
    InMemoryLeadStore,
    InMemoryProjectStore,
>;

pub(crate) type Aggregator = InboxAggregator<
    InMemoryContactStore,
    InMemoryRequestStore,
    InMemoryQuoteStore,
    InMemoryLeadStore,
>;

pub(crate) type Directory = ClientDirectory<
    InMemoryProjectStore,
    InMemoryLeadStore,
    InMemoryRequestStore,
    InMemoryContactStore,
>;

/// The wired-up back office: one set of stores shared by the intake
/// service, the inbox aggregator, and the client directory.
pub(crate) struct BackOffice {
    pub(crate) service: Arc<Service>,
    pub(crate) aggregator: Arc<Aggregator>,
    pub(crate) directory: Arc<Directory>,
}

pub(crate) fn build_back_office() -> BackOffice {
    let contacts = Arc::new(InMemoryContactStore::default());
    let requests = Arc::new(InMemoryRequestStore::default());
    let quotes = Arc::new(InMemoryQuoteStore::default());
    let leads = Arc::new(InMemoryLeadStore::default());
    let projects = Arc::new(InMemoryProjectStore::default());

    let service = Arc::new(IntakeService::new(
        contacts.clone(),
        requests.clone(),
        quotes.clone(),
        leads.clone(),
        projects.clone(),
    ));
    let aggregator = Arc::new(InboxAggregator::new(
        contacts.clone(),
        requests.clone(),
        quotes.clone(),
        leads.clone(),
    ));
    let directory = Arc::new(ClientDirectory::new(projects, leads, requests, contacts));

    BackOffice {
        service,
        aggregator,
        directory,
    }
}
