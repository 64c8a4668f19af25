//! The resolved locale configuration.
//!
//! One `lang` identifier plus nine formatting-category identifiers, assembled
//! once and immutable afterwards. `to_map()` projects the non-empty fields to
//! their environment-variable names for the consumer that writes the system
//! environment file.

use std::collections::BTreeMap;

use tracing::debug;

use crate::canonical::LocaleCanonicalizer;
use crate::formats::resolve_formats;
use crate::matcher::identify_best_match;
use crate::parts::LocaleParts;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleConfiguration {
    lang: String,
    language_tag: String,
    numeric: String,
    time: String,
    monetary: String,
    paper: String,
    name: String,
    address: String,
    telephone: String,
    measurement: String,
    identification: String,
}

impl LocaleConfiguration {
    /// Build a configuration from the language identifier and the formats
    /// identifier: every formatting category is set to `formats`.
    pub fn new(lang: impl Into<String>, formats: impl Into<String>) -> Self {
        let lang = lang.into();
        let formats = formats.into();
        let language_tag = LocaleParts::from_name(&lang).language.to_lowercase();
        Self {
            lang,
            language_tag,
            numeric: formats.clone(),
            time: formats.clone(),
            monetary: formats.clone(),
            paper: formats.clone(),
            name: formats.clone(),
            address: formats.clone(),
            telephone: formats.clone(),
            measurement: formats.clone(),
            identification: formats,
        }
    }

    /// Resolve `desired_language` and the location-derived `country_code`
    /// against the `available` list into a full configuration.
    ///
    /// Total over its inputs: a poor match degrades silently to
    /// `en_US.UTF-8` rather than surfacing an error.
    pub fn from_language_and_location<S: AsRef<str>>(
        desired_language: &str,
        available: &[S],
        country_code: &str,
        canonicalizer: impl LocaleCanonicalizer,
    ) -> Self {
        debug!("mapping {desired_language} in {country_code} to locale");
        let best_locale = identify_best_match(desired_language, available, country_code, canonicalizer);
        let formats = resolve_formats(&best_locale, available, country_code);
        Self::new(best_locale.name(), formats)
    }

    /// The resolved `LANG` identifier.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Lowercase language subtag of the resolved `lang` identifier, e.g.
    /// `"pt"` for `pt_BR.UTF-8`. Consumers use it to pick UI translations
    /// for the installed system's first boot.
    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    pub fn is_empty(&self) -> bool {
        self.lang.is_empty()
            && self.numeric.is_empty()
            && self.time.is_empty()
            && self.monetary.is_empty()
            && self.paper.is_empty()
            && self.name.is_empty()
            && self.address.is_empty()
            && self.telephone.is_empty()
            && self.measurement.is_empty()
            && self.identification.is_empty()
    }

    /// Project the non-empty fields to their environment-variable names.
    /// Empty fields are omitted, never emitted as empty strings.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        let mut add = |key: &'static str, value: &String| {
            if !value.is_empty() {
                map.insert(key, value.clone());
            }
        };

        add("LANG", &self.lang);
        add("LC_NUMERIC", &self.numeric);
        add("LC_TIME", &self.time);
        add("LC_MONETARY", &self.monetary);
        add("LC_PAPER", &self.paper);
        add("LC_NAME", &self.name);
        add("LC_ADDRESS", &self.address);
        add("LC_TELEPHONE", &self.telephone);
        add("LC_MEASUREMENT", &self.measurement);
        add("LC_IDENTIFICATION", &self.identification);

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::LikelyCountries;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_sets_every_category_to_formats() {
        let config = LocaleConfiguration::new("en_US.UTF-8", "de_CH.UTF-8");
        let map = config.to_map();
        assert_eq!(map.get("LANG"), Some(&"en_US.UTF-8".to_string()));
        for key in [
            "LC_NUMERIC",
            "LC_TIME",
            "LC_MONETARY",
            "LC_PAPER",
            "LC_NAME",
            "LC_ADDRESS",
            "LC_TELEPHONE",
            "LC_MEASUREMENT",
            "LC_IDENTIFICATION",
        ] {
            assert_eq!(map.get(key), Some(&"de_CH.UTF-8".to_string()), "{key}");
        }
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn empty_configuration_has_empty_map() {
        let config = LocaleConfiguration::default();
        assert!(config.is_empty());
        assert!(config.to_map().is_empty());
    }

    #[test]
    fn map_omits_empty_fields_entirely() {
        let config = LocaleConfiguration::new("en_US.UTF-8", "");
        assert!(!config.is_empty());
        let map = config.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("LANG"), Some(&"en_US.UTF-8".to_string()));
        assert!(map.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn language_tag_is_the_lowercase_language_subtag() {
        let config = LocaleConfiguration::new("pt_BR.UTF-8", "pt_BR.UTF-8");
        assert_eq!(config.language_tag(), "pt");
        let config = LocaleConfiguration::default();
        assert_eq!(config.language_tag(), "");
    }

    #[test]
    fn resolution_is_total_over_garbage() {
        let available: [&str; 0] = [];
        let config =
            LocaleConfiguration::from_language_and_location("", &available, "", LikelyCountries);
        assert_eq!(config.lang(), "en_US.UTF-8");
        assert_eq!(config.to_map().len(), 10);
    }
}
