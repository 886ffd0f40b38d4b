//! Data models for agenda boards, topics, and branding.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod branding;
pub mod dashboard;
pub mod rgb;
pub mod topic;

// Re-export all model types
pub use branding::BrandingConfig;
pub use dashboard::{AgendaSummary, DashboardData};
pub use rgb::RgbColor;
pub use topic::{Priority, Topic, TopicId, TopicStatus};
