use serde::{Deserialize, Serialize};

/// Outcome of a compile request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileReport {
    pub status: String,
    pub message: String,
    pub input_length: usize,
}

impl CompileReport {
    pub fn success(message: impl Into<String>, input_length: usize) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            input_length,
        }
    }
}
