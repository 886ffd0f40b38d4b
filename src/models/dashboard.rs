//! Board aggregate and its derived summary values.

use crate::models::{Topic, TopicStatus};
use serde::{Deserialize, Serialize};

/// In-memory state of one board: who it is for and the agenda itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Organization category used for branding lookup
    pub organization_category: String,
    /// Organization display name
    pub organization_name: String,
    /// Topics sorted by `order`
    pub topics: Vec<Topic>,
}

impl DashboardData {
    /// Summary figures for the current topic list.
    #[must_use]
    pub fn summary(&self) -> AgendaSummary {
        AgendaSummary::from_topics(&self.topics)
    }
}

/// Figures shown in the summary strip.
///
/// Always recomputed from the topic list; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaSummary {
    /// Number of topics on the agenda
    pub total_topics: usize,
    /// Topics currently being discussed
    pub in_progress_count: usize,
    /// Topics finished
    pub completed_count: usize,
    /// Sum of all estimated durations
    pub total_minutes: u64,
}

impl AgendaSummary {
    /// Computes the summary for a topic list.
    #[must_use]
    pub fn from_topics(topics: &[Topic]) -> Self {
        let count = |status: TopicStatus| topics.iter().filter(|t| t.status == status).count();

        Self {
            total_topics: topics.len(),
            in_progress_count: count(TopicStatus::InProgress),
            completed_count: count(TopicStatus::Completed),
            total_minutes: topics.iter().map(|t| u64::from(t.estimated_minutes)).sum(),
        }
    }
}
