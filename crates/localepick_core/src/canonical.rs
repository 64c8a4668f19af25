//! Locale-name canonicalization capability.
//!
//! The matcher's third probe asks "what full locale name does the platform
//! associate with this identifier?" to recover a country the desired
//! identifier omits. The lookup is injected so the matcher stays testable
//! with fixed fake data.

use crate::parts::LocaleParts;

/// Answers what full locale name the host associates with a bare or partial
/// identifier. Implementations must be pure read-only lookups.
pub trait LocaleCanonicalizer {
    /// The canonical `language_COUNTRY` name for `name`, or `None` when the
    /// lookup has no opinion.
    fn canonical_name(&self, name: &str) -> Option<String>;
}

impl<T: LocaleCanonicalizer + ?Sized> LocaleCanonicalizer for &T {
    fn canonical_name(&self, name: &str) -> Option<String> {
        (**self).canonical_name(name)
    }
}

/// Language -> likely country, curated from CLDR likely-subtags data.
///
/// Only the part of the table that matters for bare-language expansion;
/// identifiers that already carry a country pass through unchanged.
static LANGUAGE_LIKELY_COUNTRY: &[(&str, &str)] = &[
    ("ar", "EG"),
    ("bg", "BG"),
    ("bn", "BD"),
    ("ca", "ES"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("de", "DE"),
    ("el", "GR"),
    ("en", "US"),
    ("es", "ES"),
    ("et", "EE"),
    ("fa", "IR"),
    ("fi", "FI"),
    ("fil", "PH"),
    ("fr", "FR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("hr", "HR"),
    ("hu", "HU"),
    ("id", "ID"),
    ("it", "IT"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("lt", "LT"),
    ("lv", "LV"),
    ("mk", "MK"),
    ("ms", "MY"),
    ("nb", "NO"),
    ("nl", "NL"),
    ("pl", "PL"),
    ("pt", "BR"),
    ("ro", "RO"),
    ("ru", "RU"),
    ("sk", "SK"),
    ("sl", "SI"),
    ("sr", "RS"),
    ("sv", "SE"),
    ("th", "TH"),
    ("tr", "TR"),
    ("uk", "UA"),
    ("ur", "PK"),
    ("vi", "VN"),
    ("wo", "SN"),
    ("zh", "CN"),
];

/// Built-in canonicalizer backed by [`LANGUAGE_LIKELY_COUNTRY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LikelyCountries;

impl LocaleCanonicalizer for LikelyCountries {
    fn canonical_name(&self, name: &str) -> Option<String> {
        let parts = LocaleParts::from_name(name);
        if !parts.is_valid() {
            return None;
        }
        if !parts.country.is_empty() {
            return Some(format!("{}_{}", parts.language, parts.country));
        }
        LANGUAGE_LIKELY_COUNTRY
            .iter()
            .find(|(lang, _)| *lang == parts.language)
            .map(|(lang, country)| format!("{lang}_{country}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_language_expands_through_the_table() {
        assert_eq!(LikelyCountries.canonical_name("de"), Some("de_DE".to_string()));
        assert_eq!(LikelyCountries.canonical_name("pt"), Some("pt_BR".to_string()));
    }

    #[test]
    fn carried_country_passes_through() {
        assert_eq!(
            LikelyCountries.canonical_name("pt_PT.UTF-8"),
            Some("pt_PT".to_string())
        );
    }

    #[test]
    fn unknown_language_yields_none() {
        assert_eq!(LikelyCountries.canonical_name("xx"), None);
        assert_eq!(LikelyCountries.canonical_name("not a locale"), None);
    }
}
