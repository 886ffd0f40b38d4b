//! AgendaBoard Library
//!
//! This library provides core functionality for the AgendaBoard application:
//! category branding and logo generation, agenda topic generation and
//! reordering, snapshot export, and the terminal UI built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
