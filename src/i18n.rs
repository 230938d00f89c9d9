//! Localized user-facing messages.
//!
//! Every line the application prints goes through a [`Localizer`] by message
//! key. Templates use positional placeholders (`{0}`, `{1}`, ...) that are
//! replaced with the supplied arguments in a single pass.
//!
//! Lookup falls back from the requested locale to English, then to the
//! caller-provided default text. Only when all three are missing does the
//! lookup fail.

use std::collections::HashMap;
use thiserror::Error;

/// Locales the bundled message tables are written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (default).
    En,
    /// Korean.
    Ko,
}

/// Environment variables inspected by [`Locale::detect`], highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Parse a locale tag such as `ko`, `ko-KR` or `ko_KR.UTF-8` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_', '.']).next().unwrap_or("");
        match lang {
            "en" | "c" | "posix" => Some(Self::En),
            "ko" => Some(Self::Ko),
            _ => None,
        }
    }

    /// Resolve the process default locale from the POSIX locale variables.
    ///
    /// The first non-empty variable decides; unsupported languages fall back to English.
    pub fn detect(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse(&value))
            .unwrap_or(Self::En)
    }

    pub fn from_env() -> Self {
        Self::detect(|name| std::env::var(name).ok())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("no message found under code '{key}' for locale '{}'", locale.as_str())]
    NoSuchMessage { key: String, locale: Locale },
}

/// Resolves message keys to display text.
pub trait Localizer {
    /// Look up `key` for `locale` and substitute `args` into it.
    ///
    /// `default` is used as the template when no table has the key.
    fn message(
        &self,
        key: &str,
        args: &[&str],
        locale: Locale,
        default: Option<&str>,
    ) -> Result<String, MessageError>;
}

const MESSAGES_EN: &[(&str, &str)] = &[
    (
        "application.ready",
        "Movie Buddy is ready. Commands: directedBy <director>, releasedYearBy <year>, quit",
    ),
    ("application.commands.quit", "Bye, see you next time."),
    ("application.commands.directedBy", "Movies directed by {0}:"),
    (
        "application.commands.directedBy.format",
        "{0}. {1} ({2}), directed by {3}, watched on {4}",
    ),
    ("application.commands.directedBy.count", "{0} movie(s) found."),
    ("application.commands.releasedYearBy", "Movies released in {0}:"),
    (
        "application.commands.releasedYearBy.format",
        "{0}. {1} ({2}), directed by {3}, watched on {4}",
    ),
    ("application.commands.releasedYearBy.count", "{0} movie(s) found."),
    (
        "application.errors.InvalidCommandArguments",
        "Invalid command arguments. Check the arguments and try again.",
    ),
    (
        "application.errors.UndefinedCommandAction",
        "Unknown command. Available commands: directedBy, releasedYearBy, quit",
    ),
];

const MESSAGES_KO: &[(&str, &str)] = &[
    (
        "application.ready",
        "무비 버디가 준비되었습니다. 명령어: directedBy <감독>, releasedYearBy <개봉년도>, quit",
    ),
    ("application.commands.quit", "애플리케이션을 종료합니다. 다음에 또 만나요."),
    ("application.commands.directedBy", "{0} 감독의 영화 목록:"),
    (
        "application.commands.directedBy.format",
        "{0}. {1} ({2}), 감독: {3}, 관람일: {4}",
    ),
    ("application.commands.directedBy.count", "총 {0}편의 영화를 찾았습니다."),
    ("application.commands.releasedYearBy", "{0}년에 개봉한 영화 목록:"),
    (
        "application.commands.releasedYearBy.format",
        "{0}. {1} ({2}), 감독: {3}, 관람일: {4}",
    ),
    ("application.commands.releasedYearBy.count", "총 {0}편의 영화를 찾았습니다."),
    (
        "application.errors.InvalidCommandArguments",
        "명령어 인자가 올바르지 않습니다. 확인 후 다시 입력해주세요.",
    ),
    (
        "application.errors.UndefinedCommandAction",
        "알 수 없는 명령어입니다. 사용 가능한 명령어: directedBy, releasedYearBy, quit",
    ),
];

/// In-memory message tables keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl MessageCatalog {
    /// An empty catalog; every lookup falls through to the default text.
    pub fn new() -> Self {
        Self::default()
    }

    /// The English and Korean tables shipped with the application.
    pub fn bundled() -> Self {
        let mut catalog = Self::new();
        for (locale, entries) in [(Locale::En, MESSAGES_EN), (Locale::Ko, MESSAGES_KO)] {
            for (key, template) in entries {
                catalog.insert(locale, *key, *template);
            }
        }
        catalog
    }

    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, template: impl Into<String>) {
        self.tables
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into());
    }

    fn template(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl Localizer for MessageCatalog {
    fn message(
        &self,
        key: &str,
        args: &[&str],
        locale: Locale,
        default: Option<&str>,
    ) -> Result<String, MessageError> {
        let template = self
            .template(locale, key)
            .or_else(|| self.template(Locale::En, key))
            .or(default)
            .ok_or_else(|| MessageError::NoSuchMessage {
                key: key.to_string(),
                locale,
            })?;
        Ok(format_message(template, args))
    }
}

/// Replace `{N}` placeholders with `args[N]`.
///
/// Placeholders without a matching argument, and braces that don't form a
/// placeholder, are kept verbatim. Substituted text is never re-scanned.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_message_substitutes_positional_args() {
        assert_eq!(
            format_message("{0}. {1} ({2})", &["1", "Okja", "2017"]),
            "1. Okja (2017)"
        );
    }

    #[test]
    fn test_format_message_keeps_unknown_placeholders() {
        assert_eq!(format_message("{0} {3} {x} {", &["a"]), "a {3} {x} {");
    }

    #[test]
    fn test_format_message_does_not_rescan_arguments() {
        assert_eq!(format_message("{0}/{1}", &["{1}", "b"]), "{1}/b");
    }

    #[test]
    fn test_bundled_tables_have_the_same_keys() {
        let en: Vec<&str> = MESSAGES_EN.iter().map(|(k, _)| *k).collect();
        let ko: Vec<&str> = MESSAGES_KO.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ko);
    }

    #[test]
    fn test_lookup_uses_requested_locale() {
        let catalog = MessageCatalog::bundled();
        let text = catalog
            .message("application.commands.directedBy", &["봉준호"], Locale::Ko, None)
            .unwrap();
        assert_eq!(text, "봉준호 감독의 영화 목록:");
    }

    #[test]
    fn test_lookup_falls_back_to_english() {
        let mut catalog = MessageCatalog::new();
        catalog.insert(Locale::En, "greeting", "hello {0}");

        let text = catalog.message("greeting", &["you"], Locale::Ko, None).unwrap();

        assert_eq!(text, "hello you");
    }

    #[test]
    fn test_lookup_falls_back_to_default_then_fails() {
        let catalog = MessageCatalog::new();

        let text = catalog
            .message("missing", &[], Locale::En, Some("raw detail"))
            .unwrap();
        assert_eq!(text, "raw detail");

        let err = catalog.message("missing", &[], Locale::Ko, None).unwrap_err();
        assert_eq!(
            err,
            MessageError::NoSuchMessage {
                key: "missing".to_string(),
                locale: Locale::Ko,
            }
        );
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!(Locale::parse("ko_KR.UTF-8"), Some(Locale::Ko));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("C"), Some(Locale::En));
        assert_eq!(Locale::parse("fr_FR"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_detect_prefers_lc_all_and_skips_empty() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("LC_ALL", ""), ("LC_MESSAGES", "ko_KR.UTF-8"), ("LANG", "en_US")]);
        let locale = Locale::detect(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(locale, Locale::Ko);

        assert_eq!(Locale::detect(|_| None), Locale::En);
        assert_eq!(Locale::detect(|_| Some("de_DE".to_string())), Locale::En);
    }
}
