use async_trait::async_trait;

use crate::domain::{ports::LatexCompiler, CompileReport, DomainError};

pub const PLACEHOLDER_MESSAGE: &str = "Server-side compilation is planned for future releases. \
     Currently using client-side compilation.";

/// Acknowledges compile requests without rendering anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderCompiler;

impl PlaceholderCompiler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LatexCompiler for PlaceholderCompiler {
    async fn compile(&self, latex: &str) -> Result<CompileReport, DomainError> {
        Ok(CompileReport::success(
            PLACEHOLDER_MESSAGE,
            latex.chars().count(),
        ))
    }
}
