//! Localized user-facing messages
//!
//! Two catalogs are embedded at build time, French (default) and English.
//! Messages are addressed by dot paths such as `auth.loginError`.

use std::fmt;
use std::str::FromStr;

use serde_json::Value as JsonValue;

/// Returned when a path has no message
pub const MESSAGE_NOT_FOUND: &str = "Message not found";

const FR_CATALOG: &str = include_str!("locales/fr.json");
const EN_CATALOG: &str = include_str!("locales/en.json");

/// Supported catalog languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Primary subtag of a locale string: `en_US.UTF-8`, `en-GB` and `EN` all
    /// give English. Unsupported or empty values give None.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale
            .split(|c| c == '_' || c == '-' || c == '.' || c == '@')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Configured language first, then `LANG`, then French
    pub fn detect(configured: Option<&str>) -> Self {
        configured
            .and_then(Self::from_locale)
            .or_else(|| {
                std::env::var("LANG")
                    .ok()
                    .and_then(|lang| Self::from_locale(&lang))
            })
            .unwrap_or_default()
    }

    fn default_error(&self) -> &'static str {
        match self {
            Language::Fr => "Une erreur inattendue s'est produite.",
            Language::En => "An unexpected error occurred.",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_locale(s).ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A loaded message catalog
#[derive(Debug, Clone)]
pub struct Messages {
    language: Language,
    catalog: JsonValue,
}

impl Messages {
    /// Load the embedded catalog for a language
    ///
    /// A catalog that fails to parse yields an empty one, so every lookup
    /// answers `"Message not found"` instead of failing.
    pub fn load(language: Language) -> Self {
        let source = match language {
            Language::Fr => FR_CATALOG,
            Language::En => EN_CATALOG,
        };
        let catalog = serde_json::from_str(source).unwrap_or(JsonValue::Null);
        Self { language, catalog }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn lookup(&self, path: &str) -> Option<&str> {
        path.split('.')
            .try_fold(&self.catalog, |node, part| node.get(part))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Message at a dot path, or `"Message not found"`
    pub fn message(&self, path: &str) -> &str {
        self.lookup(path).unwrap_or(MESSAGE_NOT_FOUND)
    }

    /// Message with `{name}` placeholders replaced
    pub fn format(&self, path: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.message(path).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    /// `errors.<code>`, or the generic unexpected-error text
    pub fn error_message(&self, code: &str) -> &str {
        self.lookup(&format!("errors.{}", code))
            .unwrap_or_else(|| self.language.default_error())
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::load(Language::default())
    }
}
