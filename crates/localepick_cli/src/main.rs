//! localepick - resolve a language and location into LANG/LC_* values
//!
//! Thin consumer around `localepick_core`: reads the installed-locale list,
//! runs the resolution, and renders the result as shell-exportable
//! assignments or JSON. Resolution itself cannot fail; only I/O can.

mod config;
mod envfile;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use localepick_core::{parse_supported, LikelyCountries, LocaleConfiguration};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::LocalepickConfig;

#[derive(Debug, Parser)]
#[command(
    name = "localepick",
    version,
    about = "Resolve an interface language and location into LANG/LC_* environment values"
)]
struct Cli {
    /// Interface language identifier, e.g. `de_AT` or `en`
    #[arg(long)]
    language: Option<String>,

    /// Two-letter country code from the location step, e.g. `AT`
    #[arg(long)]
    country: Option<String>,

    /// File listing installable locales
    #[arg(long)]
    supported: Option<PathBuf>,

    /// Comma-separated locale identifiers (bypasses --supported)
    #[arg(long, value_delimiter = ',')]
    available: Option<Vec<String>>,

    /// Write the result here instead of printing it
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit a JSON object instead of KEY=value lines
    #[arg(long)]
    json: bool,

    /// Configuration file (default: ./localepick.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let file = LocalepickConfig::load(cli.config.as_deref())?;

    // Flags override file values.
    let language = cli.language.or(file.language).unwrap_or_default();
    let country = cli.country.or(file.country).unwrap_or_default();
    let supported = cli
        .supported
        .unwrap_or_else(|| PathBuf::from(&file.supported));
    let output = cli.output.or(file.output.map(PathBuf::from));
    let json = cli.json || file.json;

    let available = match cli.available {
        Some(list) => list,
        None => {
            let content = fs::read_to_string(&supported)
                .with_context(|| format!("Failed to read {}", supported.display()))?;
            parse_supported(&content)
        }
    };
    debug!("{} available locales from {}", available.len(), supported.display());

    let resolved =
        LocaleConfiguration::from_language_and_location(&language, &available, &country, LikelyCountries);
    let map = resolved.to_map();

    let rendered = if json {
        let mut s = envfile::render_json(&map)?;
        s.push('\n');
        s
    } else {
        envfile::render_locale_conf(&map)
    };

    match output {
        Some(path) => envfile::write_env_file(&path, &rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}
