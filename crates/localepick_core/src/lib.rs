//! Locale resolution for freshly installed systems.
//!
//! Resolves a user's chosen interface language and geographic location into a
//! concrete, supported locale identifier set (the `LANG` and `LC_*` category
//! variables):
//! - [`LocaleParts`]: decompose/reconstruct an identifier, score similarity
//! - [`identify_best_match`]: pick the best available identifier via three
//!   scoring probes
//! - [`resolve_formats`]: pick the (possibly different) identifier governing
//!   the formatting categories
//! - [`LocaleConfiguration`]: the assembled result, projected to an
//!   environment-variable map
//!
//! Everything is total over its inputs: malformed identifiers become invalid
//! values that lose every comparison, and absent matches degrade to
//! `en_US.UTF-8` instead of erroring. Reading the available-locale list and
//! writing environment files are the caller's concern.

mod canonical;
mod configuration;
mod error;
mod formats;
mod matcher;
mod parts;
mod supported;

pub use canonical::{LikelyCountries, LocaleCanonicalizer};
pub use configuration::LocaleConfiguration;
pub use error::ParseLocaleError;
pub use formats::resolve_formats;
pub use matcher::{identify_best_match, FALLBACK_LOCALE};
pub use parts::{LocaleParts, COMPLETE_MATCH, NO_MATCH};
pub use supported::parse_supported;
