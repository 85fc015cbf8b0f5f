//! The `generate` pipeline: preconditions, staged diff, prompt, request.
//!
//! Each stage returns early with its own error kind; nothing is printed here.

use crate::config::Config;
use crate::error::GcaiError;
use crate::git::DiffSource;
use crate::llm::catalog::ModelCatalog;
use crate::llm::prompt_builder;
use crate::llm::{GenerateRequest, InferenceClient};

/// Run every stage after configuration validation and return the raw
/// response body.
pub fn run_generate(
    config: &Config,
    catalog: &dyn ModelCatalog,
    source: &dyn DiffSource,
    client: &dyn InferenceClient,
) -> Result<String, GcaiError> {
    check_preconditions(catalog, source)?;
    let diff = extract_diff(source)?;

    let prompt = prompt_builder::compose(config.style, &config.locale, &diff);
    log::debug!(
        "Composed {} prompt in {} ({} bytes)",
        config.style,
        config.locale,
        prompt.len()
    );

    let request = GenerateRequest::new(config.model.clone(), prompt);
    client.generate(&request)
}

/// Abort unless both the inference tool and git are operable.
pub fn check_preconditions(catalog: &dyn ModelCatalog, source: &dyn DiffSource) -> Result<(), GcaiError> {
    catalog.list_models()?;
    source.check_ready()?;
    Ok(())
}

/// Staged diff with surrounding whitespace trimmed; never empty.
pub fn extract_diff(source: &dyn DiffSource) -> Result<String, GcaiError> {
    let diff = source.staged_diff()?;
    let diff = diff.trim();
    if diff.is_empty() {
        return Err(GcaiError::EmptyDiff);
    }
    Ok(diff.to_string())
}
