use super::domain::{
    ContactSubmission, Lead, ProjectRecord, ProjectRequest, QuoteRequest, RecordId,
};

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for contact-form messages.
///
/// Each store is owned and mutated by its own admin screen; readers such as
/// the inbox aggregator use `list_all` and nothing else. The stores give no
/// cross-collection snapshot: two `list_all` calls on different stores may
/// observe different points in time.
pub trait ContactStore: Send + Sync {
    fn insert(&self, record: ContactSubmission) -> Result<ContactSubmission, StoreError>;
    fn update(&self, record: ContactSubmission) -> Result<(), StoreError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<ContactSubmission>, StoreError>;
    fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError>;
}

/// Storage abstraction for project requests.
pub trait RequestStore: Send + Sync {
    fn insert(&self, record: ProjectRequest) -> Result<ProjectRequest, StoreError>;
    fn update(&self, record: ProjectRequest) -> Result<(), StoreError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<ProjectRequest>, StoreError>;
    fn list_all(&self) -> Result<Vec<ProjectRequest>, StoreError>;
}

/// Storage abstraction for quick-quote requests.
pub trait QuoteStore: Send + Sync {
    fn insert(&self, record: QuoteRequest) -> Result<QuoteRequest, StoreError>;
    fn update(&self, record: QuoteRequest) -> Result<(), StoreError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<QuoteRequest>, StoreError>;
    fn list_all(&self) -> Result<Vec<QuoteRequest>, StoreError>;
}

/// Storage abstraction for sales leads.
pub trait LeadStore: Send + Sync {
    fn insert(&self, record: Lead) -> Result<Lead, StoreError>;
    fn update(&self, record: Lead) -> Result<(), StoreError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<Lead>, StoreError>;
    fn list_all(&self) -> Result<Vec<Lead>, StoreError>;
}

/// Storage abstraction for client projects. Write path is admin entry only.
pub trait ProjectStore: Send + Sync {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError>;
    fn list_all(&self) -> Result<Vec<ProjectRecord>, StoreError>;
}
