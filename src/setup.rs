use log::debug;
use crate::config::Config;
use crate::error::GcaiError;
use crate::llm::InferenceClient;
use crate::llm::ollama::OllamaClient;

/// Build the inference client from the validated config.
pub fn build_inference_client(cfg: &Config) -> Result<Box<dyn InferenceClient>, GcaiError> {
    debug!(
        "Using OllamaClient at {} with model {} (timeout: {:?})",
        cfg.address, cfg.model, cfg.timeout
    );

    Ok(Box::new(OllamaClient::new(cfg.address.clone(), cfg.timeout)?))
}
