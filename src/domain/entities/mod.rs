mod compilation;
mod document;

pub use compilation::CompileReport;
pub use document::{Document, DocumentPatch, NewDocument, DEFAULT_TITLE};
