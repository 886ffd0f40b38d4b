//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod board;
pub mod component;
pub mod duration_editor;
pub mod handlers;
pub mod help_overlay;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::export::{ExportState, ExportStatus};
use crate::models::{AgendaSummary, BrandingConfig, DashboardData, Topic, TopicId};
use crate::services::{agenda, generate_topics, resolve_branding, IdGenerator};
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use board::BoardWidget;
pub use component::Component;
pub use duration_editor::{DurationEditor, DurationEditorEvent};
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// A card being moved, by keyboard or mouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    /// Card that was picked up
    pub source: TopicId,
    /// Card currently under the pointer or cursor (`None` when off the board)
    pub target: Option<TopicId>,
    /// Started with the mouse (ends on button release)
    pub via_mouse: bool,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Organization and its agenda
    pub data: DashboardData,
    /// Colors and font for the organization's category
    pub branding: BrandingConfig,
    /// Id source for topics created by a reset
    pub ids: Box<dyn IdGenerator>,

    // UI state
    /// Current UI theme (base palette with branding applied)
    pub theme: Theme,
    /// Index of the selected card
    pub selected: usize,
    /// Cards showing their detailed description
    pub expanded: HashSet<TopicId>,
    /// Card move in progress (if any)
    pub drag: Option<DragState>,
    /// Inline minutes editor (if open)
    pub duration_editor: Option<DurationEditor>,
    /// Help overlay (if open)
    pub help_overlay: Option<HelpOverlay>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Terminal area of the last drawn frame
    pub viewport: Rect,

    // System resources
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Application configuration
    pub config: Config,
    /// Background export state
    pub export: ExportState,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` with a freshly generated agenda.
    ///
    /// # Errors
    ///
    /// Returns error if config validation fails
    pub fn new(config: Config, mut ids: Box<dyn IdGenerator>) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let dashboard = &config.dashboard;
        let branding = resolve_branding(&dashboard.category, &dashboard.name);
        let topics = generate_topics(&dashboard.titles, &dashboard.category, ids.as_mut());
        let data = DashboardData {
            organization_category: dashboard.category.clone(),
            organization_name: dashboard.name.clone(),
            topics,
        };
        let theme = Theme::from_mode(config.ui.theme_mode).branded(&branding);
        let shortcuts = ShortcutRegistry::new();
        let help_overlay = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlay::new(&shortcuts));

        tracing::info!(
            organization = %data.organization_name,
            category = %data.organization_category,
            topics = data.topics.len(),
            "board opened"
        );

        Ok(Self {
            data,
            branding,
            ids,
            theme,
            selected: 0,
            expanded: HashSet::new(),
            drag: None,
            duration_editor: None,
            help_overlay,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            viewport: Rect::default(),
            shortcuts,
            config,
            export: ExportState::new(),
            should_quit: false,
        })
    }

    /// Summary figures for the current agenda.
    #[must_use]
    pub fn summary(&self) -> AgendaSummary {
        agenda::summarize(&self.data.topics)
    }

    /// Get the currently selected topic
    #[must_use]
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.data.topics.get(self.selected)
    }

    /// Moves the selection to the topic with `id`, if present.
    pub fn select_id(&mut self, id: &TopicId) {
        if let Some(index) = self.data.topics.iter().position(|t| &t.id == id) {
            self.selected = index;
        }
    }

    /// Replaces the agenda with the result of an agenda operation.
    ///
    /// Keeps the selection in range and forgets expanded ids that no longer exist.
    pub fn replace_topics(&mut self, topics: Vec<Topic>) {
        debug_assert!(agenda::is_consistent(&topics));
        self.data.topics = topics;
        self.selected = self.selected.min(self.data.topics.len().saturating_sub(1));
        let topics = &self.data.topics;
        self.expanded.retain(|id| topics.iter().any(|t| &t.id == id));
    }

    /// Area the cards were last drawn in.
    #[must_use]
    pub fn board_area(&self) -> Rect {
        board::screen_layout(self.viewport).board
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Applies export results to the status line.
    pub fn poll_export(&mut self) {
        if !self.export.poll() {
            return;
        }
        match self.export.status {
            ExportStatus::Failed => {
                let message = self.export.last_message.clone();
                self.set_error(message);
            }
            _ => {
                let message = self.export.last_message.clone();
                self.set_status(message);
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state, remembering the area for mouse hit-testing
        terminal.draw(|f| {
            state.viewport = f.area();
            render(f, state);
        })?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    if handlers::handle_mouse_event(state, mouse)? {
                        break;
                    }
                }
                // Resize and focus events redraw on the next pass
                _ => {}
            }
        }

        state.poll_export();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = board::screen_layout(f.area());
    BoardWidget::render_header(f, layout.header, state);
    BoardWidget::render_summary(f, layout.summary, state);
    BoardWidget::render_cards(f, layout.board, state);
    BoardWidget::render_footer(f, layout.footer, state);
    StatusBar::render(f, layout.status, state, &state.theme);

    if let Some(help) = &state.help_overlay {
        help.render(f, centered_rect(70, 80, f.area()), &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // Error overlay blocks all other input until dismissed
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.help_overlay.is_some() || state.duration_editor.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::ThemeMode;
    use crate::services::SequentialIds;

    /// Board for the Animal Welfare sample organization with sequential ids
    /// and a 100x40 viewport.
    pub fn app_state(titles: &[&str]) -> AppState {
        let mut config = Config::new();
        config.dashboard.titles = titles.iter().map(ToString::to_string).collect();
        config.ui.theme_mode = ThemeMode::Dark;
        let mut state =
            AppState::new(config, Box::new(SequentialIds::new())).expect("valid config");
        state.viewport = Rect::new(0, 0, 100, 40);
        state
    }
}
