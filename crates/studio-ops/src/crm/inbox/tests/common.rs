use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::crm::inbox::aggregator::InboxAggregator;
use crate::crm::sources::domain::{
    ContactStatus, ContactSubmission, Lead, LeadSource, LeadStatus, ProjectRequest, QuoteRequest,
    QuoteStatus, RecordId, RequestStatus,
};
use crate::crm::sources::repository::{
    ContactStore, LeadStore, QuoteStore, RequestStore, StoreError,
};

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
        guard.insert(record.id.clone(), record);
        Ok(())
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
        guard.insert(record.id.clone(), record);
        Ok(())
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
        guard.insert(record.id.clone(), record);
        Ok(())
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
        guard.insert(record.id.clone(), record);
        Ok(())
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

/// Stand-in for an unreachable backing store.
#[derive(Default, Clone)]
pub(super) struct OfflineContactStore;

impl ContactStore for OfflineContactStore {
    fn insert(&self, _record: ContactSubmission) -> Result<ContactSubmission, StoreError> {
        Err(StoreError::Unavailable("contact store offline".to_string()))
    }

    fn update(&self, _record: ContactSubmission) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("contact store offline".to_string()))
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<ContactSubmission>, StoreError> {
        Err(StoreError::Unavailable("contact store offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Err(StoreError::Unavailable("contact store offline".to_string()))
    }
}

pub(super) struct TestStores {
    pub(super) contacts: Arc<MemoryContactStore>,
    pub(super) requests: Arc<MemoryRequestStore>,
    pub(super) quotes: Arc<MemoryQuoteStore>,
    pub(super) leads: Arc<MemoryLeadStore>,
}

pub(super) type TestAggregator =
    InboxAggregator<MemoryContactStore, MemoryRequestStore, MemoryQuoteStore, MemoryLeadStore>;

pub(super) fn build_aggregator() -> (TestAggregator, TestStores) {
    let stores = TestStores {
        contacts: Arc::new(MemoryContactStore::default()),
        requests: Arc::new(MemoryRequestStore::default()),
        quotes: Arc::new(MemoryQuoteStore::default()),
        leads: Arc::new(MemoryLeadStore::default()),
    };
    let aggregator = InboxAggregator::new(
        stores.contacts.clone(),
        stores.requests.clone(),
        stores.quotes.clone(),
        stores.leads.clone(),
    );
    (aggregator, stores)
}

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn contact(id: &str, status: ContactStatus, created_at: DateTime<Utc>) -> ContactSubmission {
    ContactSubmission {
        id: RecordId(id.to_string()),
        name: "Ada Marsh".to_string(),
        email: "ada@northpine.studio".to_string(),
        service: "web design".to_string(),
        message: "We need a refresh of our gallery site.".to_string(),
        status,
        created_at,
    }
}

pub(super) fn request(id: &str, status: RequestStatus, created_at: DateTime<Utc>) -> ProjectRequest {
    ProjectRequest {
        id: RecordId(id.to_string()),
        name: "Dana Okafor".to_string(),
        email: "dana@okafor.studio".to_string(),
        business_name: Some("Okafor Studio".to_string()),
        project_types: vec!["branding".to_string()],
        description: "Full rebrand ahead of spring launch.".to_string(),
        timeline: "3 months".to_string(),
        budget: "10k-25k".to_string(),
        status,
        created_at,
    }
}

pub(super) fn quote(id: &str, status: QuoteStatus, created_at: DateTime<Utc>) -> QuoteRequest {
    QuoteRequest {
        id: RecordId(id.to_string()),
        name: "Bo Reyes".to_string(),
        phone: "515-555-0117".to_string(),
        email: None,
        service_type: "virtual tour".to_string(),
        issue_type: "new capture".to_string(),
        property_type: "retail".to_string(),
        zip_code: "50309".to_string(),
        description: None,
        status,
        created_at,
    }
}

pub(super) fn lead(id: &str, status: LeadStatus, created_at: DateTime<Utc>) -> Lead {
    Lead {
        id: RecordId(id.to_string()),
        name: "Cleo Tran".to_string(),
        email: "cleo@trancreative.co".to_string(),
        company: Some("Tran Creative".to_string()),
        phone: None,
        source: LeadSource::Referral,
        notes: "Asked about VR showroom pricing.".to_string(),
        status,
        created_at,
        last_contacted_at: None,
    }
}
