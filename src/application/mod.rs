//! Application layer - Use cases and orchestration.
//!
//! Services here validate requests against the document rules and delegate
//! storage and compilation to domain ports (traits) rather than concrete
//! implementations.

pub mod services;

pub use services::{CompileService, DocumentService};
