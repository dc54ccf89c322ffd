use std::fmt;

use serde::Deserialize;
use sys_locale::get_locale;

use crate::error::CatalogError;

pub const DEFAULT_LOCALE: &str = "en";

/// A BCP 47 style locale tag such as `en`, `en-US` or `pt-BR`.
///
/// Underscores are accepted on input (`en_US`) and normalized to `-`.
/// Subtag casing is canonicalized (`pt-br` -> `pt-BR`, `zh-hant` ->
/// `zh-Hant`) so catalog file names and configured locales compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Locale(String);

impl Locale {
    pub fn parse(tag: &str) -> Result<Self, CatalogError> {
        let tag = tag.trim();
        let valid = !tag.is_empty()
            && tag
                .split(['-', '_'])
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(CatalogError::InvalidLocale(tag.to_string()));
        }
        let normalized = tag
            .split(['-', '_'])
            .enumerate()
            .map(|(i, part)| normalize_subtag(i, part))
            .collect::<Vec<_>>()
            .join("-");
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag: `en-US` -> `en`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(self.0.as_str())
    }
}

fn normalize_subtag(index: usize, part: &str) -> String {
    match part.len() {
        _ if index == 0 => part.to_ascii_lowercase(),
        // region
        2 => part.to_ascii_uppercase(),
        // script
        4 if part.chars().all(|c| c.is_ascii_alphabetic()) => {
            let (first, rest) = part.split_at(1);
            format!("{}{}", first.to_ascii_uppercase(), rest.to_ascii_lowercase())
        }
        _ => part.to_ascii_lowercase(),
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl TryFrom<String> for Locale {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The locale reported by the operating system, or `en` when it has none
/// or reports something unparsable.
pub fn system_locale() -> Locale {
    get_locale()
        .and_then(|tag| Locale::parse(&tag).ok())
        .unwrap_or_default()
}

/// Locales consulted for a lookup, most specific first and without
/// duplicates: `en-US`, `en`, then the fallback locale.
pub fn locale_chain<'a>(active: &'a Locale, fallback: &'a Locale) -> Vec<&'a str> {
    let mut chain = vec![active.as_str()];
    for candidate in [active.language(), fallback.as_str(), fallback.language()] {
        if !chain.contains(&candidate) {
            chain.push(candidate);
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_underscore() {
        let locale = Locale::parse("pt_BR").unwrap();
        assert_eq!(locale.as_str(), "pt-BR");
        assert_eq!(locale.language(), "pt");
    }

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!(Locale::parse("pt-br").unwrap(), Locale::parse("pt-BR").unwrap());
        assert_eq!(Locale::parse("EN_us").unwrap().as_str(), "en-US");
        assert_eq!(Locale::parse("zh-hant-tw").unwrap().as_str(), "zh-Hant-TW");
        assert_eq!(Locale::parse("es-419").unwrap().as_str(), "es-419");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("en-").is_err());
        assert!(Locale::parse("en US").is_err());
        assert!(Locale::parse("../etc").is_err());
    }

    #[test]
    fn test_locale_chain() {
        let active = Locale::parse("en-US").unwrap();
        let fallback = Locale::default();
        assert_eq!(locale_chain(&active, &fallback), vec!["en-US", "en"]);

        let active = Locale::parse("de-AT").unwrap();
        assert_eq!(locale_chain(&active, &fallback), vec!["de-AT", "de", "en"]);

        let active = Locale::parse("fr").unwrap();
        let fallback = Locale::parse("en-GB").unwrap();
        assert_eq!(locale_chain(&active, &fallback), vec!["fr", "en-GB", "en"]);
    }

    #[test]
    fn test_system_locale_is_valid() {
        let locale = system_locale();
        assert!(!locale.as_str().is_empty());
    }
}
