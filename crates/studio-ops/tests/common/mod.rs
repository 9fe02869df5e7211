//! In-memory store implementations shared by the integration tests. The
//! production equivalents live in the API service crate; tests keep their
//! own copies so the library crate stays free of infra code.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use studio_ops::crm::clients::ClientDirectory;
use studio_ops::crm::inbox::InboxAggregator;
use studio_ops::crm::sources::{
    ContactStore, ContactSubmission, IntakeService, Lead, LeadStore, ProjectRecord, ProjectStore,
    ProjectRequest, QuoteRequest, QuoteStore, RecordId, RequestStore, StoreError,
};

#[derive(Default, Clone)]
pub struct MemoryContactStore {
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
pub struct MemoryRequestStore {
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
pub struct MemoryQuoteStore {
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
pub struct MemoryLeadStore {
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
pub struct MemoryProjectStore {
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

pub type Service = IntakeService<
    MemoryContactStore,
    MemoryRequestStore,
    MemoryQuoteStore,
    MemoryLeadStore,
    MemoryProjectStore,
>;

pub type Aggregator =
    InboxAggregator<MemoryContactStore, MemoryRequestStore, MemoryQuoteStore, MemoryLeadStore>;

pub type Directory =
    ClientDirectory<MemoryProjectStore, MemoryLeadStore, MemoryRequestStore, MemoryContactStore>;

/// Everything a test needs to drive the back office end to end.
pub struct BackOffice {
    pub contacts: Arc<MemoryContactStore>,
    pub requests: Arc<MemoryRequestStore>,
    pub quotes: Arc<MemoryQuoteStore>,
    pub leads: Arc<MemoryLeadStore>,
    pub projects: Arc<MemoryProjectStore>,
    pub service: Arc<Service>,
    pub aggregator: Arc<Aggregator>,
    pub directory: Arc<Directory>,
}

pub fn back_office() -> BackOffice {
    let contacts = Arc::new(MemoryContactStore::default());
    let requests = Arc::new(MemoryRequestStore::default());
    let quotes = Arc::new(MemoryQuoteStore::default());
    let leads = Arc::new(MemoryLeadStore::default());
    let projects = Arc::new(MemoryProjectStore::default());

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
    let directory = Arc::new(ClientDirectory::new(
        projects.clone(),
        leads.clone(),
        requests.clone(),
        contacts.clone(),
    ));

    BackOffice {
        contacts,
        requests,
        quotes,
        leads,
        projects,
        service,
        aggregator,
        directory,
    }
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}
