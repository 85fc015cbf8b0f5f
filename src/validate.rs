use crate::config::{Config, Settings};
use crate::error::{ConfigError, GcaiError};
use crate::llm::catalog::{installed_models, normalize_model_name, ModelCatalog};
use crate::locale::Locale;
use crate::style::Style;

/// Turn raw settings into a validated `Config`.
///
/// Style and locale are checked first so that a typo never reaches an
/// external command. The model name in the result is the normalized one.
pub fn validate_config(settings: &Settings, catalog: &dyn ModelCatalog) -> Result<Config, GcaiError> {
    let style: Style = settings.style.parse()?;
    let locale: Locale = settings.locale.parse()?;
    let model = validate_model(&settings.model, catalog)?;

    Ok(Config {
        address: settings.address.clone(),
        model,
        style,
        locale,
        timeout: settings.timeout,
    })
}

fn validate_model(model: &str, catalog: &dyn ModelCatalog) -> Result<String, GcaiError> {
    let model = normalize_model_name(model);
    let listing = catalog.list_models()?;

    if installed_models(&listing).contains(&model.as_str()) {
        Ok(model)
    } else {
        Err(ConfigError::ModelNotInstalled(model).into())
    }
}
