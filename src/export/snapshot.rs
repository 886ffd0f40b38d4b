//! Immutable board snapshots and the renderer seam.

use crate::models::{AgendaSummary, BrandingConfig, DashboardData, TopicId};
use crate::services::generate_logo_svg;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Frozen copy of a board, taken when an export is triggered.
///
/// Later edits to the live board never reach a snapshot, so a renderer can
/// run on another thread without sharing state with the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Board data in display order
    pub data: DashboardData,
    /// Resolved branding for the organization category
    pub branding: BrandingConfig,
    /// Logo as a standalone SVG document
    pub logo_svg: String,
    /// Summary figures at capture time
    pub summary: AgendaSummary,
    /// Topics whose detailed description was expanded on screen
    pub expanded: Vec<TopicId>,
    /// Date printed in the footer
    pub meeting_date: NaiveDate,
}

impl DashboardSnapshot {
    /// Captures the board as it is right now.
    #[must_use]
    pub fn capture(
        data: &DashboardData,
        branding: &BrandingConfig,
        expanded: &[TopicId],
        meeting_date: NaiveDate,
    ) -> Self {
        let mut data = data.clone();
        data.topics.sort_by_key(|t| t.order);

        Self {
            logo_svg: generate_logo_svg(
                &data.organization_name,
                &data.organization_category,
                branding,
            ),
            summary: data.summary(),
            data,
            branding: branding.clone(),
            expanded: expanded.to_vec(),
            meeting_date,
        }
    }

    /// Captures the board dated with the local calendar day.
    #[must_use]
    pub fn capture_today(data: &DashboardData, branding: &BrandingConfig, expanded: &[TopicId]) -> Self {
        Self::capture(data, branding, expanded, chrono::Local::now().date_naive())
    }

    /// Returns `true` if the topic's detailed description should be shown.
    #[must_use]
    pub fn is_expanded(&self, id: &TopicId) -> bool {
        self.expanded.contains(id)
    }

    /// Footer date, e.g. `Wednesday, March 4, 2026`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.meeting_date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Turns a snapshot into a document.
///
/// Renderers are moved onto the export worker thread, hence `Send`.
pub trait SnapshotRenderer: Send {
    /// Renders the full document.
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String>;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ExportFormat {
    /// Single-page vector document
    #[default]
    Svg,
    /// Plain-text agenda
    Markdown,
}

impl ExportFormat {
    /// Builds the renderer for this format.
    ///
    /// `scale` only applies to [`ExportFormat::Svg`].
    #[must_use]
    pub fn renderer(self, scale: f32) -> Box<dyn SnapshotRenderer> {
        match self {
            Self::Svg => Box::new(super::SvgRenderer::new(scale)),
            Self::Markdown => Box::new(super::MarkdownRenderer),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "SVG"),
            Self::Markdown => write!(f, "Markdown"),
        }
    }
}
