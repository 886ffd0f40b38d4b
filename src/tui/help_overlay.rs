//! Help overlay listing every board shortcut.
//!
//! Key labels come from the [`ShortcutRegistry`], so the overlay always shows
//! the bindings the handlers actually use.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::APP_DISPLAY_NAME;
use crate::shortcuts::{Action, ShortcutRegistry, CONTEXT_MAIN};
use crate::tui::{Component, Theme};

/// Width of the key column.
const KEY_COLUMN: usize = 16;

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// User dismissed the overlay
    Closed,
}

/// One row of the overlay: key labels and what they do.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HelpEntry {
    keys: String,
    description: &'static str,
}

/// Scrollable shortcut reference.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    entries: Vec<HelpEntry>,
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    closed: bool,
}

impl HelpOverlay {
    /// Builds the overlay from the registry's main-context bindings.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let entries = Action::HELP_ORDER
            .iter()
            .map(|action| HelpEntry {
                keys: registry.keys_for(CONTEXT_MAIN, *action).join(" / "),
                description: action.description(),
            })
            .collect();

        Self {
            entries,
            scroll_offset: 0,
            closed: false,
        }
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.entries.len() {
            self.scroll_offset += 1;
        }
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{APP_DISPLAY_NAME} shortcuts"),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(self.entries.iter().map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<KEY_COLUMN$}", entry.keys),
                    Style::default().fg(theme.success),
                ),
                Span::styled(entry.description, Style::default().fg(theme.text)),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Mouse: drag a card onto another to move it · click the minutes to edit",
            Style::default().fg(theme.text_secondary),
        )));
        lines
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => {
                self.closed = true;
                Some(HelpOverlayEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let lines = self.lines(theme);
        let total = lines.len();
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help (? or Esc to close) ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, area);

        let mut scrollbar_state = ScrollbarState::new(total).position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
