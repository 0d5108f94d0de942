use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::{ports::DocumentStore, Document, DocumentPatch, DomainError};

/// Process-local document store. A single mutex guards every read and write.
pub struct InMemoryDocumentStore {
    documents: Mutex<HashMap<String, Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Document>>, DomainError> {
        self.documents
            .lock()
            .map_err(|e| DomainError::internal(e.to_string()))
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, doc: Document) -> Result<Document, DomainError> {
        let mut store = self.lock()?;
        store.insert(doc.id.clone(), doc.clone());
        Ok(doc)
    }

    async fn list(&self) -> Result<Vec<Document>, DomainError> {
        let store = self.lock()?;
        Ok(store.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Document>, DomainError> {
        let store = self.lock()?;
        Ok(store.get(id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        patch: DocumentPatch,
    ) -> Result<Option<Document>, DomainError> {
        let mut store = self.lock()?;
        Ok(store.get_mut(id).map(|doc| {
            doc.apply(patch);
            doc.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut store = self.lock()?;
        Ok(store.remove(id).is_some())
    }
}
