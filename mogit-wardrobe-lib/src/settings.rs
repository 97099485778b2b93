//! Optional user settings (output directory, user agent).
//!
//! Settings live in `~/.config/mogit-wardrobe/settings.toml`:
//!
//! ```toml
//! [output]
//! dir = "D:/Games/World of Warcraft/_retail_/Interface/AddOns/MogIt_Wardrobe"
//!
//! [http]
//! user_agent = "Mozilla/5.0 ..."
//! ```
//!
//! Every value is optional. A command-line flag beats the file, and the
//! file beats the built-in default.

use std::io;
use std::path::{Path, PathBuf};

use mogit_wardrobe_scraper::DEFAULT_USER_AGENT;
use serde::{Deserialize, Serialize};

/// Output directory used when neither the CLI nor the settings file set one.
pub const DEFAULT_OUTPUT_DIR: &str = "MogIt_Wardrobe";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    CommandLine,
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::CommandLine => "command line",
            Self::SettingsFile => "settings file",
            Self::Default => "default",
        })
    }
}

/// A setting value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: SettingSource,
}

impl<T> Resolved<T> {
    fn pick(cli: Option<T>, file: Option<T>, default: impl FnOnce() -> T) -> Self {
        if let Some(value) = cli {
            return Self {
                value,
                source: SettingSource::CommandLine,
            };
        }
        if let Some(value) = file {
            return Self {
                value,
                source: SettingSource::SettingsFile,
            };
        }
        Self {
            value: default(),
            source: SettingSource::Default,
        }
    }
}

/// Canonical path to the settings file: `~/.config/mogit-wardrobe/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mogit-wardrobe").join("settings.toml")
}

impl Settings {
    /// Load settings from the default location. A missing file yields the
    /// defaults; an unreadable or malformed one is logged and ignored.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Could not read {}: {e}", path.display());
                return Self::default();
            }
        };
        match Self::parse(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Resolve the output directory: CLI override, then settings, then
    /// [`DEFAULT_OUTPUT_DIR`] relative to the working directory.
    pub fn resolve_output_dir(&self, cli_override: Option<PathBuf>) -> Resolved<PathBuf> {
        Resolved::pick(cli_override, self.output.dir.clone(), || {
            PathBuf::from(DEFAULT_OUTPUT_DIR)
        })
    }

    /// Resolve the user agent: CLI override, then settings, then the
    /// built-in browser string.
    pub fn resolve_user_agent(&self, cli_override: Option<String>) -> Resolved<String> {
        Resolved::pick(cli_override, self.http.user_agent.clone(), || {
            DEFAULT_USER_AGENT.to_string()
        })
    }
}

/// Save (or clear) the output directory in the settings file at `settings`.
///
/// Only `[output] dir` is touched; every other key is written back as it
/// was read. A file that exists but is not valid TOML is left alone and
/// reported as [`io::ErrorKind::InvalidData`].
pub fn save_output_dir(settings: &Path, dir: Option<&Path>) -> io::Result<()> {
    let mut doc = read_document(settings)?;

    let output_table = doc
        .entry("output")
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[output] is not a table"))?;

    match dir {
        Some(d) => {
            output_table.insert(
                "dir".to_string(),
                toml::Value::String(d.to_string_lossy().into_owned()),
            );
        }
        None => {
            output_table.remove("dir");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// The settings file as a raw table. A missing file is an empty table.
fn read_document(settings: &Path) -> io::Result<toml::Table> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(toml::Table::new()),
        Err(e) => return Err(e),
    };
    contents.parse::<toml::Table>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} is not valid TOML, fix or remove it first: {e}", settings.display()),
        )
    })
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
