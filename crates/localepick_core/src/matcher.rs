//! Best-match selection among the available locales.
//!
//! Three successive probes score the available list against the desired
//! identifier: unmodified, with the location-derived country substituted,
//! and with the country the canonicalization capability associates with the
//! identifier. The first probe to reach a complete match wins outright;
//! otherwise the highest-scoring candidate across all probes does.

use tracing::debug;

use crate::canonical::LocaleCanonicalizer;
use crate::parts::{LocaleParts, COMPLETE_MATCH, NO_MATCH};

/// Hard-coded last resort when nothing in the available list scores above
/// [`NO_MATCH`].
pub const FALLBACK_LOCALE: &str = "en_US.UTF-8";

/// One probe: the best-scoring candidate for `reference`, or `None` when no
/// candidate beats [`NO_MATCH`].
///
/// Candidates are stable-sorted by similarity ascending and the last element
/// taken, so among equal-scoring candidates the one latest in the available
/// list wins. That tie-break is deliberate and documented, not incidental.
fn best_candidate(reference: &LocaleParts, candidates: &[LocaleParts]) -> Option<(i32, LocaleParts)> {
    let mut ranked: Vec<&LocaleParts> = candidates.iter().collect();
    ranked.sort_by_key(|c| reference.similarity(c));
    let best = ranked.last()?;
    let score = reference.similarity(best);
    if score > NO_MATCH {
        debug!("best match for {} is {} ({})", reference.name(), best.name(), score);
        Some((score, (*best).clone()))
    } else {
        debug!("no good match for {}", reference.name());
        None
    }
}

/// Pick the single best match for `desired` among `available`, given the
/// two-letter `country_hint` from the location step.
///
/// Never returns an invalid value: when no probe beats [`NO_MATCH`] (or the
/// inputs are unusable) the result is [`FALLBACK_LOCALE`]'s decomposition.
pub fn identify_best_match<S: AsRef<str>>(
    desired: &str,
    available: &[S],
    country_hint: &str,
    canonicalizer: impl LocaleCanonicalizer,
) -> LocaleParts {
    let reference = LocaleParts::from_name(desired);
    if reference.is_valid() && !available.is_empty() {
        let candidates: Vec<LocaleParts> = available
            .iter()
            .map(|s| LocaleParts::from_name(s.as_ref()))
            .collect();

        let derived_country = canonicalizer
            .canonical_name(desired)
            .map(|name| LocaleParts::from_name(&name).country)
            .unwrap_or_default();

        // Probe order matters: it decides ties at a complete match.
        let probes = [
            reference.clone(),
            reference.with_country(country_hint),
            reference.with_country(derived_country),
        ];

        let mut best_score = NO_MATCH;
        let mut best_match = LocaleParts::default();
        for probe in probes {
            if let Some((score, candidate)) = best_candidate(&probe, &candidates) {
                if score >= COMPLETE_MATCH {
                    return candidate;
                }
                if score > best_score {
                    best_score = score;
                    best_match = candidate;
                }
            }
        }
        if best_match.is_valid() {
            debug!("matched {} best with {}", desired, best_match.name());
            return best_match;
        }
    }

    // Unrecognized or unsupported locale; this ends the guesswork.
    debug!("falling back to {} for {}", FALLBACK_LOCALE, desired);
    LocaleParts::from_name(FALLBACK_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Canonicalizer with a single fixed answer.
    struct Fixed(Option<&'static str>);

    impl LocaleCanonicalizer for Fixed {
        fn canonical_name(&self, _name: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    const NONE: Fixed = Fixed(None);

    #[test]
    fn exact_available_entry_wins() {
        let available = ["de_DE.UTF-8", "en_US.UTF-8"];
        let m = identify_best_match("en_US.UTF-8", &available, "US", NONE);
        assert_eq!(m.name(), "en_US.UTF-8");
    }

    #[test]
    fn language_only_match_survives_missing_country_variant() {
        let available = ["de_DE.UTF-8", "en_US.UTF-8"];
        let m = identify_best_match("de_AT", &available, "AT", NONE);
        assert_eq!(m.name(), "de_DE.UTF-8");
    }

    #[test]
    fn country_hint_probe_completes_bare_language() {
        let available = ["en_GB.UTF-8", "en_US.UTF-8", "fr_FR.UTF-8"];
        let m = identify_best_match("en", &available, "GB", NONE);
        assert_eq!(m.name(), "en_GB.UTF-8");
    }

    #[test]
    fn derived_country_probe_recovers_omitted_country() {
        let available = ["pt_BR.UTF-8", "pt_PT.UTF-8"];
        let m = identify_best_match("pt", &available, "", Fixed(Some("pt_BR")));
        assert_eq!(m.name(), "pt_BR.UTF-8");
    }

    #[test]
    fn nonsense_desired_falls_back() {
        let available = ["en_US.UTF-8"];
        let m = identify_best_match("xx_YY", &available, "YY", NONE);
        assert_eq!(m.name(), FALLBACK_LOCALE);
    }

    #[test]
    fn invalid_desired_falls_back() {
        let available = ["en_US.UTF-8"];
        assert_eq!(identify_best_match("", &available, "US", NONE).name(), FALLBACK_LOCALE);
        assert_eq!(
            identify_best_match("no spaces allowed", &available, "US", NONE).name(),
            FALLBACK_LOCALE
        );
    }

    #[test]
    fn empty_available_list_falls_back() {
        let available: [&str; 0] = [];
        let m = identify_best_match("de_DE.UTF-8", &available, "DE", NONE);
        assert_eq!(m.name(), FALLBACK_LOCALE);
    }

    #[test]
    fn invalid_available_entries_never_win() {
        let available = ["", "garbage entry", "de_DE.UTF-8"];
        let m = identify_best_match("de", &available, "DE", NONE);
        assert_eq!(m.name(), "de_DE.UTF-8");
    }

    #[test]
    fn equal_scores_resolve_to_the_later_entry() {
        // Both score identically against bare `nl` with no useful hint; the
        // stable sort keeps list order, so the later entry wins.
        let available = ["nl_BE.UTF-8", "nl_NL.UTF-8"];
        let m = identify_best_match("nl", &available, "", NONE);
        assert_eq!(m.name(), "nl_NL.UTF-8");

        let available = ["nl_NL.UTF-8", "nl_BE.UTF-8"];
        let m = identify_best_match("nl", &available, "", NONE);
        assert_eq!(m.name(), "nl_BE.UTF-8");
    }

    #[test]
    fn earlier_probe_takes_precedence_at_complete_match() {
        // Probe 1 already completes; the country hint pointing elsewhere must
        // not override it.
        let available = ["en_US.UTF-8", "en_GB.UTF-8"];
        let m = identify_best_match("en_US.UTF-8", &available, "GB", NONE);
        assert_eq!(m.name(), "en_US.UTF-8");
    }
}
