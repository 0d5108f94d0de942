use std::sync::Arc;
use tracing::instrument;

use crate::domain::{ports::LatexCompiler, CompileReport, DomainError};

pub struct CompileService {
    compiler: Arc<dyn LatexCompiler>,
}

impl CompileService {
    pub fn new(compiler: Arc<dyn LatexCompiler>) -> Self {
        Self { compiler }
    }

    #[instrument(skip(self, latex), fields(input_bytes = latex.len()))]
    pub async fn compile(&self, latex: &str) -> Result<CompileReport, DomainError> {
        self.compiler.compile(latex).await
    }
}
