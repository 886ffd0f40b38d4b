//! Action handlers organized by category

/// Reset, export, help, and quit handlers
pub mod board;

/// Card selection handlers
pub mod navigation;

/// Card move handlers (keyboard and mouse drag)
pub mod reorder;

/// Status, duration, and detail handlers for the selected topic
pub mod topic;
