pub mod catalog;
pub mod ollama;
pub mod prompt_builder;
mod prompts;

use crate::error::GcaiError;

pub use prompts::SYSTEM_INSTRUCTIONS;

/// One non-streaming generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: SYSTEM_INSTRUCTIONS.to_string(),
            prompt: prompt.into(),
        }
    }
}

/// Trait for talking to the inference server.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceClient: Send + Sync {
    /// Send the request and return the raw, well-formed JSON response body.
    fn generate(&self, request: &GenerateRequest) -> Result<String, GcaiError>;
}
