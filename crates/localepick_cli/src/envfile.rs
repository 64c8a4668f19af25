//! Rendering the resolved map for consumers.
//!
//! The shell form is the `locale.conf(5)` format: one `KEY=value` assignment
//! per line, in key order. The JSON form carries the same omit-empty map.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Render `KEY=value` lines in key order, with a trailing newline.
pub fn render_locale_conf(map: &BTreeMap<&'static str, String>) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Render the map as a JSON object.
pub fn render_json(map: &BTreeMap<&'static str, String>) -> Result<String> {
    serde_json::to_string_pretty(map).context("Failed to serialize locale map")
}

pub fn write_env_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        map.insert("LANG", "en_US.UTF-8".to_string());
        map.insert("LC_NUMERIC", "de_CH.UTF-8".to_string());
        map
    }

    #[test]
    fn locale_conf_lines_are_in_key_order() {
        assert_eq!(
            render_locale_conf(&sample()),
            "LANG=en_US.UTF-8\nLC_NUMERIC=de_CH.UTF-8\n"
        );
    }

    #[test]
    fn empty_map_renders_to_nothing() {
        assert_eq!(render_locale_conf(&BTreeMap::new()), "");
    }

    #[test]
    fn json_carries_the_same_entries() {
        let json = render_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["LANG"], "en_US.UTF-8");
        assert_eq!(parsed["LC_NUMERIC"], "de_CH.UTF-8");
        assert_eq!(parsed.as_object().unwrap().len(), 2);
    }
}
