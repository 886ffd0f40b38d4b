//! Summary command: prints the board's agenda and totals.

use crate::cli::common::{BoardArgs, CliError, CliResult};
use crate::models::{AgendaSummary, BrandingConfig, DashboardData, Priority, TopicStatus};
use crate::services::agenda;
use clap::Args;
use serde::Serialize;

/// Print the agenda and its summary figures
#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable summary for output
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SummaryOutput<'a> {
    organization_name: &'a str,
    organization_category: &'a str,
    branding: BrandingOutput<'a>,
    summary: AgendaSummary,
    topics: Vec<TopicOutput<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BrandingOutput<'a> {
    primary_color: String,
    secondary_color: String,
    accent_color: String,
    background_color: String,
    text_color: String,
    font_family: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TopicOutput<'a> {
    order: usize,
    title: &'a str,
    status: TopicStatus,
    priority: Priority,
    estimated_minutes: u32,
}

impl SummaryArgs {
    /// Execute the summary command
    pub fn execute(&self, board: &BoardArgs) -> CliResult<()> {
        let config = board.load_config()?;
        let (data, branding) = BoardArgs::build_board(&config);

        if self.json {
            output_json(&data, &branding)?;
        } else {
            output_human_readable(&data, &branding);
        }
        Ok(())
    }
}

fn output_json(data: &DashboardData, branding: &BrandingConfig) -> CliResult<()> {
    let output = SummaryOutput {
        organization_name: &data.organization_name,
        organization_category: &data.organization_category,
        branding: BrandingOutput {
            primary_color: branding.primary_color.to_hex(),
            secondary_color: branding.secondary_color.to_hex(),
            accent_color: branding.accent_color.to_hex(),
            background_color: branding.background_color.to_hex(),
            text_color: branding.text_color.to_hex(),
            font_family: &branding.font_family,
        },
        summary: agenda::summarize(&data.topics),
        topics: data
            .topics
            .iter()
            .map(|t| TopicOutput {
                order: t.order,
                title: &t.title,
                status: t.status,
                priority: t.priority,
                estimated_minutes: t.estimated_minutes,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize summary: {e}")))?;
    println!("{json}");
    Ok(())
}

fn output_human_readable(data: &DashboardData, branding: &BrandingConfig) {
    let summary = agenda::summarize(&data.topics);

    println!("{} ({})", data.organization_name, data.organization_category);
    println!(
        "Theme: {} on {}, font {}",
        branding.primary_color,
        branding.background_color,
        branding.primary_font()
    );
    println!();
    for topic in &data.topics {
        println!(
            "{:>2}. {:<40} {:<12} {:<7} {:>4} min",
            topic.order + 1,
            topic.title,
            topic.status.label(),
            topic.priority.badge(),
            topic.estimated_minutes
        );
    }
    println!();
    println!("Topics:      {}", summary.total_topics);
    println!("In progress: {}", summary.in_progress_count);
    println!("Completed:   {}", summary.completed_count);
    println!("Minutes:     {}", summary.total_minutes);
}
