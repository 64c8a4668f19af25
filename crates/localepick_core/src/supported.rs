//! Installed-locale list parsing.
//!
//! Handles the conventional listing formats: `/usr/share/i18n/SUPPORTED`
//! (`en_US.UTF-8 UTF-8`, one per line) and uncommented `/etc/locale.gen`
//! entries. Pure over the text; reading the file belongs to the caller.

/// Extract the locale identifiers from a supported-locales listing.
///
/// One identifier per line with an optional trailing charset column; `#`
/// comments and blank lines are ignored.
pub fn parse_supported(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
