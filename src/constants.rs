//! Application identity constants.
//!
//! Names and file locations used by the CLI, the TUI and the config layer.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "AgendaBoard";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "agendaboard";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "AgendaBoard";

/// Config file name inside [`APP_DATA_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file written while the TUI owns the terminal.
pub const LOG_FILE_NAME: &str = "agendaboard.log";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Branded meeting agenda board for the terminal";

/// Window title shown in the header block.
#[must_use]
pub fn board_title(organization_name: &str) -> String {
    format!(" {APP_DISPLAY_NAME} · {organization_name} ")
}
