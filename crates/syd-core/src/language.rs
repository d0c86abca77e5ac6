//! Display languages and localized text.
//!
//! The demo deck ships in two languages. Every user-facing string is carried
//! as a [`LocalizedText`] pair and resolved at render time against the
//! session [`Language`].

use serde::{Deserialize, Serialize};

/// A display language supported by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Italian (the default language of the deck).
    Italiano,
    /// English.
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::Italiano
    }
}

impl Language {
    /// Returns the display name used in the language selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Italiano => "Italiano",
            Language::English => "English",
        }
    }

    /// Parses a selector label back into a language.
    ///
    /// Matching is case-insensitive and accepts the short codes `it`/`en`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "italiano" | "it" => Some(Language::Italiano),
            "english" | "en" => Some(Language::English),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bilingual string, one value per supported language.
///
/// Screen text follows a newline-delimited convention: the first line is the
/// title, following lines are subtitle/slogan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "Italiano")]
    pub italiano: String,
    #[serde(rename = "English")]
    pub english: String,
}

impl LocalizedText {
    /// Builds a localized pair from two literals.
    pub fn new(italiano: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            italiano: italiano.into(),
            english: english.into(),
        }
    }

    /// Resolves the text for the given language.
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::Italiano => &self.italiano,
            Language::English => &self.english,
        }
    }
}

/// Picks one of two literals depending on the language.
///
/// Small helper for localized defaults and error messages, so call sites
/// read as a single expression instead of a match.
pub fn localized(language: Language, italiano: &str, english: &str) -> String {
    match language {
        Language::Italiano => italiano.to_string(),
        Language::English => english.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_labels_and_codes() {
        assert_eq!(Language::parse("Italiano"), Some(Language::Italiano));
        assert_eq!(Language::parse("en"), Some(Language::English));
        assert_eq!(Language::parse("français"), None);
    }

    #[test]
    fn test_resolve() {
        let text = LocalizedText::new("Ciao", "Hello");
        assert_eq!(text.resolve(Language::Italiano), "Ciao");
        assert_eq!(text.resolve(Language::English), "Hello");
    }

    #[test]
    fn test_serde_uses_selector_labels_as_keys() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"Italiano":"Prezzi","English":"Pricing"}"#).unwrap();
        assert_eq!(text.italiano, "Prezzi");
        assert_eq!(text.english, "Pricing");
    }
}
