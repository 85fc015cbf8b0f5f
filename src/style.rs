use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Commit title prefix convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Simple,
    Conventional,
    Gitmoji,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Simple => "simple",
            Style::Conventional => "conventional",
            Style::Gitmoji => "gitmoji",
        }
    }
}

impl FromStr for Style {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Style::Simple),
            "conventional" => Ok(Style::Conventional),
            "gitmoji" => Ok(Style::Gitmoji),
            other => Err(ConfigError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_styles() {
        for style in [Style::Simple, Style::Conventional, Style::Gitmoji] {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_styles() {
        for bad in ["", "Simple", "angular", "gitmoji "] {
            assert!(matches!(bad.parse::<Style>(), Err(ConfigError::InvalidStyle(_))));
        }
    }
}
