//! Configuration types for autoqa.
//!
//! [`Config::load`] reads `~/.config/autoqa/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The Gemini API key is deliberately *not* part of the config file; it comes
//! from the `GEMINI_API_KEY` environment variable so it never lands on disk.

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ai]
model               = "gemini-2.5-flash"
summary_sample_size = 15

[report]
truncate_cell_chars = 40
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/autoqa/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[ai]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// How many tickets from the head of a batch feed the executive summary.
    #[serde(default = "default_summary_sample_size")]
    pub summary_sample_size: usize,
}

fn default_model() -> String { "gemini-2.5-flash".to_string() }
fn default_summary_sample_size() -> usize { 15 }

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            summary_sample_size: default_summary_sample_size(),
        }
    }
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Cell values longer than this are truncated with an ellipsis in the
    /// ticket table.
    #[serde(default = "default_truncate_cell_chars")]
    pub truncate_cell_chars: usize,
}

fn default_truncate_cell_chars() -> usize { 40 }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            truncate_cell_chars: default_truncate_cell_chars(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/autoqa/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
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

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("autoqa")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
