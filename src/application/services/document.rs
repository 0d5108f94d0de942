use std::sync::Arc;
use tracing::instrument;

use crate::domain::{ports::DocumentStore, Document, DocumentPatch, DomainError, NewDocument};

pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewDocument) -> Result<Document, DomainError> {
        let doc = self.store.insert(input.into_document()).await?;
        tracing::info!(document_id = %doc.id, "document created");
        Ok(doc)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Document>, DomainError> {
        self.store.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Document, DomainError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Document not found"))
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: DocumentPatch) -> Result<Document, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::validation(
                "Request body must contain 'title' or 'content'",
            ));
        }

        let doc = self
            .store
            .update(id, patch)
            .await?
            .ok_or_else(|| DomainError::not_found("Document not found"))?;
        tracing::info!(document_id = %doc.id, "document updated");
        Ok(doc)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.store.delete(id).await? {
            return Err(DomainError::not_found("Document not found"));
        }
        tracing::info!(document_id = %id, "document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_TITLE;
    use crate::infrastructure::InMemoryDocumentStore;

    fn service() -> DocumentService {
        DocumentService::new(Arc::new(InMemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = service();
        let created = service
            .create(NewDocument::new("\\documentclass{article}").with_title("My Document"))
            .await
            .unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched.title, "My Document");
        assert_eq!(fetched.content, "\\documentclass{article}");
    }

    #[tokio::test]
    async fn test_create_without_title() {
        let doc = service().create(NewDocument::new("x")).await.unwrap();
        assert_eq!(doc.title, DEFAULT_TITLE);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let err = service().get("unknown-id").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_empty_patch_is_validation_error() {
        let service = service();
        let doc = service.create(NewDocument::new("x")).await.unwrap();

        let err = service
            .update(&doc.id, DocumentPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_empty_patch_on_unknown_id_is_validation_error() {
        let err = service()
            .update("unknown-id", DocumentPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let err = service()
            .update(
                "unknown-id",
                DocumentPatch {
                    title: Some("x".into()),
                    content: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();
        let doc = service.create(NewDocument::new("x")).await.unwrap();

        service.delete(&doc.id).await.unwrap();

        assert!(matches!(
            service.get(&doc.id).await.unwrap_err(),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            service.delete(&doc.id).await.unwrap_err(),
            DomainError::NotFound(_)
        ));
    }
}
