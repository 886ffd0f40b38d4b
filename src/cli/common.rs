//! Shared CLI plumbing: error kinds, exit codes, and board options.

use std::fmt;
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::models::{BrandingConfig, DashboardData};
use crate::services::{generate_topics, resolve_branding, SequentialIds};

/// Process exit codes for headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input or configuration
    ValidationError = 1,
    /// Filesystem failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// What went wrong in a CLI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid arguments or configuration
    Validation,
    /// Reading or writing files failed
    Io,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Error category
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options that pick the configuration and override the board contents.
///
/// Shared by the TUI and every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct BoardArgs {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Organization category (selects the branding theme)
    #[arg(long, value_name = "CATEGORY", global = true)]
    pub category: Option<String>,

    /// Organization name
    #[arg(long, value_name = "NAME", global = true)]
    pub name: Option<String>,

    /// Agenda title (repeat for several topics; replaces the configured list)
    #[arg(long = "title", value_name = "TITLE", global = true)]
    pub titles: Vec<String>,
}

impl BoardArgs {
    /// Path of the configuration file in use.
    pub fn config_path(&self) -> CliResult<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}"))),
        }
    }

    /// Loads the configuration and applies the command-line overrides.
    pub fn load_config(&self) -> CliResult<Config> {
        let path = self.config_path()?;
        let mut config = Config::load_from(&path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        config
            .apply_overrides(self.category.as_deref(), self.name.as_deref(), &self.titles)
            .map_err(|e| CliError::validation(format!("Invalid board options: {e:#}")))?;
        Ok(config)
    }

    /// Builds the board described by the configuration.
    ///
    /// Ids are sequential so headless output is reproducible.
    #[must_use]
    pub fn build_board(config: &Config) -> (DashboardData, BrandingConfig) {
        let dashboard = &config.dashboard;
        let branding = resolve_branding(&dashboard.category, &dashboard.name);
        let topics = generate_topics(
            &dashboard.titles,
            &dashboard.category,
            &mut SequentialIds::new(),
        );
        let data = DashboardData {
            organization_category: dashboard.category.clone(),
            organization_name: dashboard.name.clone(),
            topics,
        };
        (data, branding)
    }
}
