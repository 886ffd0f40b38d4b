//! Logo command: prints or writes the organization's SVG logo.

use crate::cli::common::{BoardArgs, CliError, CliResult};
use crate::services::generate_logo_svg;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Generate the organization logo as SVG
#[derive(Debug, Clone, Args)]
pub struct LogoArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LogoArgs {
    /// Execute the logo command
    pub fn execute(&self, board: &BoardArgs) -> CliResult<()> {
        let config = board.load_config()?;
        let (data, branding) = BoardArgs::build_board(&config);
        let svg = generate_logo_svg(
            &data.organization_name,
            &data.organization_category,
            &branding,
        );

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        CliError::io(format!(
                            "Failed to create directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                fs::write(path, svg)
                    .map_err(|e| CliError::io(format!("Failed to write logo: {e}")))?;
                println!("✓ Logo written to: {}", path.display());
            }
            None => println!("{svg}"),
        }
        Ok(())
    }
}
