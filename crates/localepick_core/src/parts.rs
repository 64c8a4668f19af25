//! Locale identifier decomposition.
//!
//! A locale identifier has the canonical shape
//! `language[_COUNTRY][.encoding][@modifier]`, e.g. `sr_RS.UTF-8@latin`.
//! [`LocaleParts`] splits one apart, puts it back together, and scores how
//! closely two decompositions agree.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseLocaleError;

/// Floor of the similarity scale. Scores at or below this mean
/// "do not use this candidate".
pub const NO_MATCH: i32 = 0;

/// Ceiling of the similarity scale, reached only when every subtag the
/// reference carries agrees with the candidate.
pub const COMPLETE_MATCH: i32 = 100;

fn locale_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([a-zA-Z]+)(_[a-zA-Z]+)?(\.[-a-zA-Z0-9]+)?(@[a-zA-Z]+)?$")
            .expect("locale name regex is well-formed")
    })
}

/// The decomposition of one locale identifier string.
///
/// A parts value is *valid* iff `language` is non-empty; malformed input
/// parses to an invalid value rather than an error, and an invalid value
/// scores [`NO_MATCH`] against everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocaleParts {
    pub language: String,
    pub country: String,
    pub encoding: String,
    pub modifier: String,
}

impl LocaleParts {
    /// Parse the canonical `language[_COUNTRY][.encoding][@modifier]` form.
    ///
    /// Never fails: malformed or empty input yields an invalid
    /// (empty-language) value. Case is preserved as given.
    pub fn from_name(name: &str) -> Self {
        let Some(caps) = locale_name_regex().captures(name) else {
            return Self::default();
        };
        let strip = |idx: usize| {
            caps.get(idx)
                // Group 1 has no separator; groups 2..4 carry `_`, `.`, `@`.
                .map(|m| {
                    if idx == 1 {
                        m.as_str().to_string()
                    } else {
                        m.as_str()[1..].to_string()
                    }
                })
                .unwrap_or_default()
        };
        Self {
            language: strip(1),
            country: strip(2),
            encoding: strip(3),
            modifier: strip(4),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.language.is_empty()
    }

    /// Reconstruct the canonical identifier string.
    pub fn name(&self) -> String {
        let mut s = self.language.clone();
        if !self.country.is_empty() {
            s.push('_');
            s.push_str(&self.country);
        }
        if !self.encoding.is_empty() {
            s.push('.');
            s.push_str(&self.encoding);
        }
        if !self.modifier.is_empty() {
            s.push('@');
            s.push_str(&self.modifier);
        }
        s
    }

    /// A copy with only `country` replaced, used by the matcher to probe
    /// alternate country hypotheses.
    pub fn with_country(&self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..self.clone()
        }
    }

    /// Score how closely `other` matches this reference.
    ///
    /// - either side invalid, or a language difference: [`NO_MATCH`]
    /// - identical parts: [`COMPLETE_MATCH`]
    /// - same language: deduct 40 for a country difference (empty versus
    ///   non-empty counts as different), and 25 each for an encoding or
    ///   modifier difference, where an empty encoding/modifier on the
    ///   reference side places no constraint on the candidate.
    pub fn similarity(&self, other: &LocaleParts) -> i32 {
        if !self.is_valid() || !other.is_valid() {
            return NO_MATCH;
        }
        if self.language != other.language {
            return NO_MATCH;
        }
        let mut score = COMPLETE_MATCH;
        if self.country != other.country {
            score -= 40;
        }
        if !self.encoding.is_empty() && self.encoding != other.encoding {
            score -= 25;
        }
        if !self.modifier.is_empty() && self.modifier != other.modifier {
            score -= 25;
        }
        score
    }
}

impl fmt::Display for LocaleParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Strict face of [`LocaleParts::from_name`]: surfaces invalidity as a typed
/// error for callers that want a `Result`.
impl FromStr for LocaleParts {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseLocaleError::Empty);
        }
        let parts = Self::from_name(s);
        if parts.is_valid() {
            Ok(parts)
        } else {
            Err(ParseLocaleError::Malformed(s.to_string()))
        }
    }
}
