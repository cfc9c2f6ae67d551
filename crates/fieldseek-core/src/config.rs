//! Configuration types for fieldseek.
//!
//! [`Config::load`] reads `~/.config/fieldseek/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads a
//! specific file layered over the same defaults. [`Config::defaults`] returns
//! the defaults without touching the filesystem (useful in tests).

use crate::error::Result;
use crate::search::DEFAULT_MAX_RESULTS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
case_sensitive      = false
max_results         = 50
include_collections = true
include_nested      = true

[output]
show_provenance  = true
show_scores      = true
tidy_punctuation = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/fieldseek/config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_true")]
    pub include_collections: bool,
    #[serde(default = "default_true")]
    pub include_nested: bool,
}

fn default_max_results() -> usize { DEFAULT_MAX_RESULTS }
fn default_true() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_results: default_max_results(),
            include_collections: default_true(),
            include_nested: default_true(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub show_provenance: bool,
    #[serde(default = "default_true")]
    pub show_scores: bool,
    /// Strip the spacing the punctuation formatter inserts before displaying
    /// matched text.
    #[serde(default)]
    pub tidy_punctuation: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_provenance: default_true(),
            show_scores: default_true(),
            tidy_punctuation: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fieldseek/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load `path` layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fieldseek")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
