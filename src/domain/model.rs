use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, also the fallback for anything unrecognised.
    #[default]
    Es,
    En,
}

impl Language {
    pub const FALLBACK: Language = Language::Es;

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Parses `es`, `EN`, `en-US`, `es_MX` and the like. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Exact site code only: `es` or `en`. Anything else, including `EN` or
    /// `en-US`, yields `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Exact site code, or Spanish for any other code.
    pub fn from_code_or_fallback(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A string published in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub es: String,
    pub en: String,
}

impl Localized {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    /// Same text in both languages (proper nouns, city names).
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            es: text.clone(),
            en: text,
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }

    /// Resolves `code` to a string. Only the exact codes `es` and `en` select a
    /// language; every other code reads the Spanish text. A blank string for the
    /// selected language is a `MissingTranslation`, never an empty result.
    pub fn resolve(&self, field: &str, code: &str) -> Result<&str> {
        let language = Language::from_code_or_fallback(code);
        let text = self.get(language);
        if text.trim().is_empty() {
            return Err(DirectoryError::MissingTranslation {
                field: field.to_string(),
                language: language.code().to_string(),
            });
        }
        Ok(text)
    }

    /// Fails on the first blank translation.
    pub fn ensure_complete(&self, field: &str) -> Result<()> {
        for language in [Language::Es, Language::En] {
            if self.get(language).trim().is_empty() {
                return Err(DirectoryError::MissingTranslation {
                    field: field.to_string(),
                    language: language.code().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizedField {
    Title,
    Quote,
    Description,
    Hours,
}

impl LocalizedField {
    pub fn name(self) -> &'static str {
        match self {
            LocalizedField::Title => "title",
            LocalizedField::Quote => "quote",
            LocalizedField::Description => "description",
            LocalizedField::Hours => "hours",
        }
    }
}

/// An office as supplied by the content provider, before the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub city: String,
    pub state: String,
    pub title: Localized,
    pub quote: Localized,
    pub description: Localized,
    pub hours: Localized,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub image: String,
    #[serde(default)]
    pub services: Vec<Localized>,
}

/// A catalog entry. Built only by [`crate::core::catalog::Catalog::build`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeRecord {
    pub id: String,
    pub city: String,
    pub state: String,
    pub title: Localized,
    pub quote: Localized,
    pub description: Localized,
    pub hours: Localized,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub map_query_url: String,
    pub image_path: String,
    pub services: Vec<Localized>,
}

impl OfficeRecord {
    pub fn field(&self, field: LocalizedField) -> &Localized {
        match field {
            LocalizedField::Title => &self.title,
            LocalizedField::Quote => &self.quote,
            LocalizedField::Description => &self.description,
            LocalizedField::Hours => &self.hours,
        }
    }

    pub fn localized(&self, field: LocalizedField, code: &str) -> Result<&str> {
        self.field(field).resolve(field.name(), code)
    }

    pub fn localized_services(&self, code: &str) -> Result<Vec<&str>> {
        self.services
            .iter()
            .map(|service| service.resolve("services", code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("es"), Some(Language::Es));
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("en-US"), Some(Language::En));
        assert_eq!(Language::parse("es_MX"), Some(Language::Es));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Language::from_code("es"), Some(Language::Es));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        for code in ["EN", "en-US", "en_GB", " en ", "fr", ""] {
            assert_eq!(Language::from_code(code), None, "code {:?}", code);
        }
        assert_eq!(Language::from_code_or_fallback("de"), Language::Es);
    }

    #[test]
    fn test_resolve_falls_back_to_spanish() {
        let quote = Localized::new("Defensa sin fronteras.", "Defense without borders.");
        assert_eq!(quote.resolve("quote", "es").unwrap(), "Defensa sin fronteras.");
        assert_eq!(quote.resolve("quote", "en").unwrap(), "Defense without borders.");
        assert_eq!(quote.resolve("quote", "fr").unwrap(), "Defensa sin fronteras.");
    }

    #[test]
    fn test_resolve_region_and_case_variants_use_spanish() {
        let quote = Localized::new("Defensa sin fronteras.", "Defense without borders.");
        for code in ["en-US", "EN", "en_GB", " en "] {
            assert_eq!(
                quote.resolve("quote", code).unwrap(),
                "Defensa sin fronteras.",
                "code {:?}",
                code
            );
        }
    }

    #[test]
    fn test_resolve_blank_requested_translation_fails() {
        let hours = Localized::new("Lun - Vie 9am - 5pm", "  ");
        let err = hours.resolve("hours", "en").unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::MissingTranslation { ref field, ref language }
                if field == "hours" && language == "en"
        ));
        assert_eq!(hours.resolve("hours", "es").unwrap(), "Lun - Vie 9am - 5pm");
    }

    #[test]
    fn test_resolve_never_returns_empty() {
        let blank = Localized::new("", "English");
        let err = blank.resolve("title", "fr").unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::MissingTranslation { ref field, ref language }
                if field == "title" && language == "es"
        ));
    }

    #[test]
    fn test_ensure_complete() {
        assert!(Localized::same("Chicago").ensure_complete("title").is_ok());
        assert!(Localized::new("Chicago", "").ensure_complete("title").is_err());
    }
}
