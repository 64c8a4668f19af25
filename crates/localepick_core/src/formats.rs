//! Formats (LC_*) identifier selection.
//!
//! The identifier governing number/time/currency formatting may legitimately
//! differ from the language identifier: a user asking for English in
//! Switzerland should still get Swiss conventions. The resolution prefers
//! what the available list itself disambiguates and only consults the curated
//! country table as a tie-breaker among multiple country variants.

use tracing::debug;

use crate::parts::LocaleParts;

/// Country -> preferred language subtag, used only as a last-resort
/// disambiguator among several `_CC` variants.
///
/// Entries are curated judgment calls, not derived data. It is reasonable to
/// default to French for France despite the minority languages spoken there;
/// anyone preferring those will already have selected them. Some cases are
/// deliberately absent: picking either Greek or Turkish for Cyprus would
/// probably offend somebody, and punting to no entry is at least unlikely to
/// give offence.
static COUNTRY_DEFAULT_LANGUAGE: &[(&str, &str)] = &[
    ("AU", "en"),
    ("CN", "zh"),
    ("DE", "de"),
    ("DK", "da"),
    ("DZ", "ar"),
    ("ES", "es"),
    // Somewhat unclear: Oromo has the greatest number of native speakers;
    // English is the most widely spoken language and taught in secondary
    // schools; Amharic is the official language and was taught in primary
    // schools.
    ("ET", "am"),
    ("FI", "fi"),
    ("FR", "fr"),
    ("GB", "en"),
    // Irish (Gaelic) is strongly associated with Ireland, but nearly all its
    // native speakers also speak English, and migrants are likely to use
    // English.
    ("IE", "en"),
    // India has many languages even though Hindi is known as the national
    // language, but English is used in all computer and mobile devices.
    ("IN", "en"),
    ("IT", "it"),
    ("MA", "ar"),
    ("MK", "mk"),
    ("NG", "en"),
    ("NL", "nl"),
    ("NZ", "en"),
    ("IL", "he"),
    // Filipino is a de facto version of Tagalog, which is also spoken;
    // English is also an official language.
    ("PH", "fil"),
    ("PK", "ur"),
    ("PL", "pl"),
    ("RU", "ru"),
    // Chinese has more speakers, but English is the "common language of the
    // nation" (Wikipedia) and official documents must be translated into
    // English to be accepted.
    ("SG", "en"),
    ("SN", "wo"),
    ("TR", "tr"),
    ("TW", "zh"),
    ("UA", "uk"),
    ("US", "en"),
    ("ZM", "en"),
];

fn default_language_for(country_code: &str) -> Option<&'static str> {
    COUNTRY_DEFAULT_LANGUAGE
        .iter()
        .find(|(cc, _)| *cc == country_code)
        .map(|(_, lang)| *lang)
}

/// Choose the identifier governing the formatting categories.
///
/// Never returns an empty string for a valid `best_locale`: when nothing in
/// `available` resolves, the formats mirror the language identifier.
pub fn resolve_formats<S: AsRef<str>>(
    best_locale: &LocaleParts,
    available: &[S],
    country_code: &str,
) -> String {
    let contains = |wanted: &str| available.iter().any(|s| s.as_ref() == wanted);

    let combined = format!("{}_{}", best_locale.language, country_code);
    let mut formats = String::new();
    if contains(&best_locale.language) {
        debug!("exact formats match for language tag {}", best_locale.language);
        formats = best_locale.language.clone();
    } else if contains(&combined) {
        debug!("exact formats match for combined {combined}");
        formats = combined;
    }

    if formats.is_empty() {
        let infix = format!("_{country_code}");
        let mut country_variants: Vec<&str> = available
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| s.contains(&infix))
            .collect();
        country_variants.sort_unstable();

        if country_variants.len() == 1 {
            // The available list disambiguates on its own; no table needed.
            formats = country_variants[0].to_string();
        } else if country_variants.len() > 1 {
            if let Some(language) = default_language_for(country_code) {
                let preferred = format!("{language}_{country_code}");
                if let Some(line) = available
                    .iter()
                    .map(|s| s.as_ref())
                    .find(|s| s.starts_with(&preferred))
                {
                    formats = line.to_string();
                }
            }
        }
    }

    if formats.is_empty() {
        debug!("no formats choice for {country_code}, mirroring {}", best_locale.name());
        best_locale.name()
    } else {
        formats
    }
}
