pub mod compiler;
pub mod config;
pub mod document_store;

pub use compiler::PlaceholderCompiler;
pub use config::{Config, ConfigError, LogFormat};
pub use document_store::InMemoryDocumentStore;
