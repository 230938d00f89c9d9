use crate::i18n::Locale;
use std::path::PathBuf;
use thiserror::Error;

/// Path of a JSON movie metadata file replacing the bundled one.
pub const METADATA_VAR: &str = "MOVIEBUDDY_METADATA";
/// Locale forcing the message language, e.g. `ko` or `en_US`.
pub const LOCALE_VAR: &str = "MOVIEBUDDY_LOCALE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported locale '{value}' in MOVIEBUDDY_LOCALE (supported: en, ko)")]
    UnsupportedLocale { value: String },
}

/// Application settings taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Metadata file to load; the bundled metadata is used when `None`.
    pub metadata: Option<PathBuf>,
    /// Message locale; detected from the POSIX locale variables when `None`.
    pub locale: Option<Locale>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let metadata = get(METADATA_VAR).map(PathBuf::from);
        let locale = match get(LOCALE_VAR) {
            Some(value) => Some(
                Locale::parse(&value).ok_or(ConfigError::UnsupportedLocale { value })?,
            ),
            None => None,
        };
        Ok(Self { metadata, locale })
    }

    /// The configured locale, or the one detected from the environment.
    pub fn resolve_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        assert_eq!(config(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_reads_metadata_and_locale() {
        let config = config(&[
            (METADATA_VAR, "/data/movies.json"),
            (LOCALE_VAR, "ko_KR.UTF-8"),
        ])
        .unwrap();

        assert_eq!(config.metadata, Some(PathBuf::from("/data/movies.json")));
        assert_eq!(config.locale, Some(Locale::Ko));
        assert_eq!(config.resolve_locale(), Locale::Ko);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config(&[(METADATA_VAR, "  "), (LOCALE_VAR, "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_rejects_unsupported_locale() {
        let err = config(&[(LOCALE_VAR, "fr")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedLocale {
                value: "fr".to_string()
            }
        );
    }
}
