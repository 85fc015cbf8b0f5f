use crate::error::PreconditionError;
use crate::process::tool_output;

/// Tag appended to model names given without one, as `ollama` does.
pub const DEFAULT_TAG: &str = "latest";

/// Lists the models installed for the local inference tool.
#[cfg_attr(test, mockall::automock)]
pub trait ModelCatalog: Send + Sync {
    /// Raw output of the listing command.
    fn list_models(&self) -> Result<String, PreconditionError>;
}

/// `ModelCatalog` backed by `ollama list`.
pub struct OllamaCli;

impl ModelCatalog for OllamaCli {
    fn list_models(&self) -> Result<String, PreconditionError> {
        tool_output("ollama", &["list"])
            .map_err(|e| PreconditionError::InferenceToolUnavailable(e.to_string()))
    }
}

/// `llama3` -> `llama3:latest`; names that already carry a tag are kept.
pub fn normalize_model_name(model: &str) -> String {
    if model.contains(':') {
        model.to_string()
    } else {
        format!("{model}:{DEFAULT_TAG}")
    }
}

/// Model names from `ollama list` output: first column, header skipped.
pub fn installed_models(listing: &str) -> Vec<&str> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|name| *name != "NAME")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
NAME                    ID              SIZE      MODIFIED
llama3:latest           365c0bd3c000    4.7 GB    2 weeks ago
mistral:7b-instruct     f974a74358d6    4.1 GB    3 days ago
";

    #[test]
    fn normalizes_untagged_names() {
        assert_eq!(normalize_model_name("llama3"), "llama3:latest");
        assert_eq!(normalize_model_name("mistral:7b-instruct"), "mistral:7b-instruct");
    }

    #[test]
    fn parses_listing() {
        assert_eq!(installed_models(LISTING), vec!["llama3:latest", "mistral:7b-instruct"]);
        assert!(installed_models("").is_empty());
        assert!(installed_models("NAME ID SIZE MODIFIED\n").is_empty());
    }
}
