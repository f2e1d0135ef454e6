//! Configuration management for Taskboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_COMMIT_DELAY_MS, DEFAULT_TICK_RATE_MS, FORM_DEFAULT_WIDTH, FORM_MAX_WIDTH,
    FORM_MIN_WIDTH, MAX_COMMIT_DELAY_MS, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
use crate::model::PriorityFilter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub form: FormConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Width of the form pane in columns
    pub form_width: u16,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
}

/// Task form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay before a submitted task is added to the list, in milliseconds
    pub commit_delay_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show task descriptions in list view
    pub show_descriptions: bool,
    /// Priority filter applied on startup ("" for none, or Low/Medium/High)
    pub default_filter: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            form_width: FORM_DEFAULT_WIDTH,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            commit_delay_ms: DEFAULT_COMMIT_DELAY_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            default_filter: String::new(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl FormConfig {
    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }
}

impl DisplayConfig {
    /// Parsed startup filter. Falls back to no filter for unknown labels.
    pub fn initial_filter(&self) -> PriorityFilter {
        self.default_filter.parse().unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("taskboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("taskboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.form_width < FORM_MIN_WIDTH || self.ui.form_width > FORM_MAX_WIDTH {
            anyhow::bail!(
                "form_width must be between {} and {} columns, got {}",
                FORM_MIN_WIDTH,
                FORM_MAX_WIDTH,
                self.ui.form_width
            );
        }

        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                MIN_TICK_RATE_MS,
                MAX_TICK_RATE_MS,
                self.ui.tick_rate_ms
            );
        }

        if self.form.commit_delay_ms > MAX_COMMIT_DELAY_MS {
            anyhow::bail!("commit_delay_ms cannot exceed {} (one minute)", MAX_COMMIT_DELAY_MS);
        }

        if let Err(e) = self.display.default_filter.parse::<PriorityFilter>() {
            anyhow::bail!("Invalid default_filter: {}", e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let mut full_content = format!(
            "# Taskboard Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        // Document every setting right above its line
        for line in toml_content.lines() {
            if let Some((key, _)) = line.split_once(" = ") {
                if let Some(comment) = Self::setting_comment(key.trim()) {
                    full_content.push_str(&format!("# {}\n", comment));
                }
            }
            full_content.push_str(line);
            full_content.push('\n');
        }

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    fn setting_comment(key: &str) -> Option<String> {
        let comment = match key {
            "form_width" => format!(
                "Width of the form pane in columns ({}-{})",
                FORM_MIN_WIDTH, FORM_MAX_WIDTH
            ),
            "tick_rate_ms" => format!(
                "Event loop tick in milliseconds ({}-{})",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS
            ),
            "commit_delay_ms" => format!(
                "Delay before a submitted task is added to the list, in milliseconds (at most {})",
                MAX_COMMIT_DELAY_MS
            ),
            "show_descriptions" => "Show task descriptions under each task".to_string(),
            "default_filter" => {
                "Priority filter applied on startup: \"\" for none, or \"low\", \"medium\", \"high\"".to_string()
            }
            "enabled" => "Write log entries to <data dir>/taskboard/taskboard.log".to_string(),
            _ => return None,
        };
        Some(comment)
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("taskboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
