use async_trait::async_trait;

use crate::domain::{errors::DomainError, CompileReport};

#[async_trait]
pub trait LatexCompiler: Send + Sync {
    async fn compile(&self, latex: &str) -> Result<CompileReport, DomainError>;
}
