mod compiler;
mod document_store;

pub use compiler::LatexCompiler;
pub use document_store::DocumentStore;
