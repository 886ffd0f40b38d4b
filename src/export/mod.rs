//! Export of agenda boards as standalone documents.
//!
//! A [`DashboardSnapshot`] is captured from the live board and handed to a
//! [`SnapshotRenderer`]. The TUI runs exports on a background worker through
//! [`ExportState`]; the CLI calls [`export_to_file`] directly.

pub mod job;
pub mod markdown;
pub mod snapshot;
pub mod svg;

pub use job::{
    export_file_name, export_to_file, export_to_path, ExportGuard, ExportMessage, ExportState,
    ExportStatus,
};
pub use markdown::MarkdownRenderer;
pub use snapshot::{DashboardSnapshot, ExportFormat, SnapshotRenderer};
pub use svg::{SvgRenderer, DEFAULT_SCALE, MAX_SCALE};

#[cfg(test)]
pub(crate) mod test_support {
    use super::DashboardSnapshot;
    use crate::models::DashboardData;
    use crate::services::{generate_topics, resolve_branding, SequentialIds};
    use chrono::NaiveDate;

    pub fn board(titles: &[&str]) -> DashboardData {
        DashboardData {
            organization_category: "Animal Welfare".to_string(),
            organization_name: "Goats of Anarchy".to_string(),
            topics: generate_topics(titles, "Animal Welfare", &mut SequentialIds::new()),
        }
    }

    pub fn snapshot(titles: &[&str]) -> DashboardSnapshot {
        let data = board(titles);
        let branding = resolve_branding(&data.organization_category, &data.organization_name);
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap_or_default();
        DashboardSnapshot::capture(&data, &branding, &[], date)
    }
}
