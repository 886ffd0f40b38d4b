//! Configuration management CLI command.

use crate::cli::common::{BoardArgs, CliError, CliResult};
use crate::config::Config;
use crate::services::branding::{is_known_category, known_categories};
use clap::Args;

/// Show or create the configuration file
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Print the effective configuration as TOML (default)
    #[arg(long, conflicts_with = "init")]
    pub show: bool,

    /// Write a configuration file with the defaults and any board overrides
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl ConfigArgs {
    /// Execute config command
    pub fn execute(&self, board: &BoardArgs) -> CliResult<()> {
        if self.init {
            self.init_config(board)
        } else {
            show_config(board)
        }
    }

    fn init_config(&self, board: &BoardArgs) -> CliResult<()> {
        let path = board.config_path()?;
        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        let mut config = Config::new();
        config
            .apply_overrides(
                board.category.as_deref(),
                board.name.as_deref(),
                &board.titles,
            )
            .map_err(|e| CliError::validation(format!("Invalid board options: {e:#}")))?;
        warn_unknown_category(&config.dashboard.category);

        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to write configuration: {e:#}")))?;

        println!("✓ Configuration written to: {}", path.display());
        Ok(())
    }
}

fn show_config(board: &BoardArgs) -> CliResult<()> {
    let config = board.load_config()?;
    warn_unknown_category(&config.dashboard.category);

    let toml = toml::to_string_pretty(&config)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
    println!("{toml}");
    Ok(())
}

/// Unknown categories are valid (they get the default theme) but usually a typo.
fn warn_unknown_category(category: &str) {
    if !is_known_category(category) {
        eprintln!(
            "Note: '{category}' has no theme of its own and uses the default branding. Known categories: {}",
            known_categories().join(", ")
        );
    }
}
