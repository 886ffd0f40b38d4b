//! Agenda topics: identity, status, priority and position.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-scoped identifier of a topic.
///
/// Identifiers are handed out by an [`IdGenerator`](crate::services::topics::IdGenerator)
/// when a topic set is generated and are never reused within that generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress state of a topic.
///
/// Any state can be selected from any other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicStatus {
    /// Not discussed yet (initial state)
    #[default]
    NotStarted,
    /// Under discussion
    InProgress,
    /// Discussion finished
    Completed,
    /// Postponed to a later meeting
    Deferred,
}

impl TopicStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Deferred,
    ];

    /// Human-readable label used on status buttons.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Deferred => "Deferred",
        }
    }

    /// Indicator color for the status dot and the active button.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        match self {
            Self::NotStarted => RgbColor::from_u32(0x94A3B8),
            Self::InProgress => RgbColor::from_u32(0xF59E0B),
            Self::Completed => RgbColor::from_u32(0x22C55E),
            Self::Deferred => RgbColor::from_u32(0xEF4444),
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discussion priority of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can slip if time runs short
    Low,
    /// Normal agenda item
    Medium,
    /// Must be covered
    High,
}

impl Priority {
    /// Uppercase badge text.
    #[must_use]
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Badge colors as `(background, border)`.
    #[must_use]
    pub const fn badge_colors(&self) -> (RgbColor, RgbColor) {
        match self {
            Self::Low => (RgbColor::from_u32(0xE0F2FE), RgbColor::from_u32(0x0284C7)),
            Self::Medium => (RgbColor::from_u32(0xFEF3C7), RgbColor::from_u32(0xF59E0B)),
            Self::High => (RgbColor::from_u32(0xFEE2E2), RgbColor::from_u32(0xDC2626)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.badge())
    }
}

/// A single agenda item.
///
/// # Invariants (maintained by the agenda services)
///
/// - `estimated_minutes` is positive
/// - across a list, `order` values are exactly `0..len` and ids are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Session-unique identifier
    pub id: TopicId,
    /// Title shown on the card
    pub title: String,
    /// One-line summary
    pub description: String,
    /// Long description shown when the card is expanded
    pub detailed_description: String,
    /// Current progress state
    pub status: TopicStatus,
    /// Discussion priority
    pub priority: Priority,
    /// Estimated discussion time in minutes
    pub estimated_minutes: u32,
    /// Zero-based position in the agenda
    pub order: usize,
}
