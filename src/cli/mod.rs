//! CLI command handlers for AgendaBoard.
//!
//! This module provides headless, scriptable access to the board: exporting
//! snapshots, generating the logo, printing the agenda, and managing the
//! configuration file.

pub mod common;
pub mod config;
pub mod export;
pub mod logo;
pub mod summary;

// Re-export types used by main.rs and tests
pub use common::{BoardArgs, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use logo::LogoArgs;
pub use summary::SummaryArgs;
