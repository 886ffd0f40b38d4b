//! Export command for writing a board snapshot without the TUI.

use crate::cli::common::{BoardArgs, CliError, CliResult};
use crate::export::{export_file_name, export_to_path, DashboardSnapshot, ExportFormat, MAX_SCALE};
use crate::models::TopicId;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Export the board as an SVG or Markdown document
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Document format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file (defaults to the standard file name inside --dir)
    #[arg(short, long, value_name = "FILE", conflicts_with = "dir")]
    pub output: Option<PathBuf>,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// SVG scale factor
    #[arg(long, value_name = "N")]
    pub scale: Option<f32>,

    /// Meeting date printed in the footer (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Include every topic's detailed description
    #[arg(long)]
    pub expanded: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, board: &BoardArgs) -> CliResult<()> {
        let config = board.load_config()?;

        let scale = self.scale.unwrap_or(config.export.scale);
        if !scale.is_finite() || scale <= 0.0 || scale > MAX_SCALE {
            return Err(CliError::validation(format!(
                "Scale must be in (0, {MAX_SCALE}], got {scale}"
            )));
        }

        let (data, branding) = BoardArgs::build_board(&config);
        let expanded: Vec<TopicId> = if self.expanded {
            data.topics.iter().map(|t| t.id.clone()).collect()
        } else {
            Vec::new()
        };
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let snapshot = DashboardSnapshot::capture(&data, &branding, &expanded, date);

        let format = self.format.unwrap_or(config.export.format);
        let renderer = format.renderer(scale);
        let output_path = self.get_output_path(
            &data.organization_name,
            renderer.extension(),
            config.export.resolved_output_dir(),
        );

        export_to_path(&snapshot, renderer.as_ref(), &output_path)
            .map_err(|e| CliError::io(format!("Failed to export board: {e:#}")))?;

        println!("✓ Exported {format} to: {}", output_path.display());
        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, organization: &str, extension: &str, default_dir: PathBuf) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }
        let dir = self.dir.clone().unwrap_or(default_dir);
        dir.join(export_file_name(organization, extension))
    }
}
