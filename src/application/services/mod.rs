mod compile;
mod document;

pub use compile::CompileService;
pub use document::DocumentService;
