use crate::Cli;
use crate::locale::Locale;
use crate::style::Style;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_STYLE: &str = "simple";
pub const DEFAULT_LOCALE: &str = "en";

/// Unvalidated settings, merged from every source.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub address: String,
    pub model: String,
    pub style: String,
    pub locale: String,
    pub timeout: Option<Duration>,
}

/// Validated configuration, built once by `validate::validate_config`.
#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,
    pub model: String,
    pub style: Style,
    pub locale: Locale,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Build the settings from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, ...)
    ///   2. Env vars `GCAI_*` (resolved by clap)
    ///   3. TOML `~/.config/gcai.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();
        Self::merge(cli, file_cfg)
    }

    fn merge(cli: &Cli, file_cfg: FileConfig) -> Self {
        let address = cli
            .address
            .clone()
            .or(file_cfg.address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let model = cli
            .model
            .clone()
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let style = cli
            .style
            .clone()
            .or(file_cfg.style)
            .unwrap_or_else(|| DEFAULT_STYLE.to_string());

        let locale = cli
            .locale
            .clone()
            .or(file_cfg.locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let timeout = cli
            .timeout
            .or(file_cfg.timeout_secs)
            .map(Duration::from_secs);

        Settings {
            address,
            model,
            style,
            locale,
            timeout,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub address: Option<String>,
    pub model: Option<String>,
    pub style: Option<String>,
    pub locale: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Return `~/.config/gcai.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("gcai.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    match read_file_config(&path) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("Ignoring config file: {e:#}");
            None
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_file_config(&data).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_file_config(data: &str) -> Result<FileConfig> {
    Ok(toml::from_str::<FileConfig>(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["gcai"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::merge(&cli(&["generate"]), FileConfig::default());

        assert_eq!(
            settings,
            Settings {
                address: DEFAULT_ADDRESS.into(),
                model: DEFAULT_MODEL.into(),
                style: DEFAULT_STYLE.into(),
                locale: DEFAULT_LOCALE.into(),
                timeout: None,
            }
        );
    }

    #[test]
    fn cli_overrides_file_and_file_overrides_defaults() {
        let file_cfg = parse_file_config(
            r#"
            model = "mistral"
            style = "gitmoji"
            timeout_secs = 30
            "#,
        )
        .unwrap();

        let settings = Settings::merge(&cli(&["-m", "phi3", "generate"]), file_cfg);

        assert_eq!(settings.model, "phi3");
        assert_eq!(settings.style, "gitmoji");
        assert_eq!(settings.locale, DEFAULT_LOCALE);
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(parse_file_config("model = ").is_err());
    }
}
