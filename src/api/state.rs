use std::sync::Arc;

use crate::application::{CompileService, DocumentService};
use crate::domain::ports::{DocumentStore, LatexCompiler};
use crate::infrastructure::{Config, InMemoryDocumentStore, PlaceholderCompiler};

#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
    pub compile_service: Arc<CompileService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn DocumentStore>,
        compiler: Arc<dyn LatexCompiler>,
    ) -> Self {
        Self {
            document_service: Arc::new(DocumentService::new(store)),
            compile_service: Arc::new(CompileService::new(compiler)),
            config: Arc::new(config),
        }
    }

    /// State backed by a fresh in-memory store and the placeholder compiler.
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryDocumentStore::new()),
            Arc::new(PlaceholderCompiler::new()),
        )
    }
}
