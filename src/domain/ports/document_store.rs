use async_trait::async_trait;

use crate::domain::{errors::DomainError, Document, DocumentPatch};

/// Storage for documents keyed by id.
///
/// Implementations must make every call atomic with respect to the others:
/// `update` applies the patch inside the same critical section as the lookup,
/// and returned documents are copies detached from the stored record.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, doc: Document) -> Result<Document, DomainError>;
    async fn list(&self) -> Result<Vec<Document>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Document>, DomainError>;
    /// Returns `None` when no document has this id.
    async fn update(&self, id: &str, patch: DocumentPatch)
        -> Result<Option<Document>, DomainError>;
    /// Returns `false` when no document has this id.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
