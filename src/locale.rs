use std::fmt;
use std::str::FromStr;

use isocountry::CountryCode;
use isolang::Language;
use language_tags::LanguageTag;

use crate::error::ConfigError;

/// A well-formed BCP-47 language tag, e.g. `en`, `fr-CA` or `en-US-u-ca-gregory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: LanguageTag,
}

impl Locale {
    /// English name of the language, used in the prompt.
    ///
    /// The region, if any, is appended in parentheses (`French (Canada)`).
    /// Languages without an ISO 639 entry fall back to the tag itself.
    pub fn display_name(&self) -> String {
        let code = self.tag.primary_language().to_ascii_lowercase();
        let language = match code.len() {
            2 => Language::from_639_1(&code),
            3 => Language::from_639_3(&code),
            _ => None,
        };

        let Some(language) = language else {
            return self.tag.to_string();
        };

        match self.tag.region() {
            Some(region) => format!("{} ({})", language.to_name(), region_name(region)),
            None => language.to_name().to_string(),
        }
    }
}

/// `CA` -> `Canada`; numeric areas such as `419` stay as they are.
fn region_name(region: &str) -> String {
    CountryCode::for_alpha2(&region.to_ascii_uppercase())
        .map(|country| country.name().to_string())
        .unwrap_or_else(|_| region.to_string())
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = LanguageTag::parse(s)
            .map_err(|e| ConfigError::InvalidLocale(format!("{s} ({e})")))?;
        Ok(Locale { tag })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag.as_str())
    }
}
