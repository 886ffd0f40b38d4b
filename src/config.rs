//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{APP_DATA_DIR, CONFIG_FILE_NAME};
use crate::export::{ExportFormat, DEFAULT_SCALE, MAX_SCALE};
use crate::services::topics::default_titles;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// The organization and agenda shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Organization category used for branding lookup
    pub category: String,
    /// Organization display name
    pub name: String,
    /// Agenda titles in meeting order
    pub titles: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            category: "Animal Welfare".to_string(),
            name: "Goats of Anarchy".to_string(),
            titles: default_titles(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Target directory (documents or home directory if unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Document format
    #[serde(default)]
    pub format: ExportFormat,
    /// SVG output scale factor
    #[serde(default = "default_export_scale")]
    pub scale: f32,
}

/// Default export scale (2x)
const fn default_export_scale() -> f32 {
    DEFAULT_SCALE
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            format: ExportFormat::default(),
            scale: default_export_scale(),
        }
    }
}

impl ExportConfig {
    /// Directory exports are written to.
    ///
    /// Falls back to the user's documents directory, then home, then the
    /// current directory.
    #[must_use]
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/AgendaBoard/config.toml`
/// - macOS: `~/Library/Application Support/AgendaBoard/config.toml`
/// - Windows: `%APPDATA%\AgendaBoard\config.toml`
///
/// # Validation
///
/// - organization name must not be blank
/// - at least one agenda title, none blank
/// - export scale must be in `(0, 8]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Organization and agenda
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// A missing file yields the defaults; a present but invalid file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `config_path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "configuration saved");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.dashboard.name.trim().is_empty() {
            anyhow::bail!("Organization name must not be empty");
        }

        if self.dashboard.titles.is_empty() {
            anyhow::bail!("Agenda must contain at least one title");
        }

        if let Some(index) = self.dashboard.titles.iter().position(|t| t.trim().is_empty()) {
            anyhow::bail!("Agenda title {} is empty", index + 1);
        }

        let scale = self.export.scale;
        if !scale.is_finite() || scale <= 0.0 || scale > MAX_SCALE {
            anyhow::bail!("Export scale must be in (0, {MAX_SCALE}], got {scale}");
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the loaded file.
    ///
    /// An empty `titles` slice keeps the configured agenda.
    pub fn apply_overrides(
        &mut self,
        category: Option<&str>,
        name: Option<&str>,
        titles: &[String],
    ) -> Result<()> {
        if let Some(category) = category {
            self.dashboard.category = category.to_string();
        }
        if let Some(name) = name {
            self.dashboard.name = name.to_string();
        }
        if !titles.is_empty() {
            self.dashboard.titles = titles.to_vec();
        }
        self.validate()
    }
}
