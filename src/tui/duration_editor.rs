//! Inline editor for a topic's estimated minutes.
//!
//! Only digits can be typed. Enter, Tab, or losing focus commits; input that
//! does not parse as a positive number keeps the editor open and leaves the
//! topic unchanged. Esc discards the edit.

use std::num::NonZeroU32;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Topic, TopicId};
use crate::services::agenda::{exceeds_advisory_max, parse_minutes, ADVISORY_MAX_MINUTES};
use crate::tui::{Component, Theme};

/// Longest accepted input.
const MAX_INPUT_LEN: usize = 6;

/// Events emitted by the duration editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationEditorEvent {
    /// A valid value was committed
    Committed(TopicId, NonZeroU32),
    /// The edit was discarded
    Cancelled,
}

/// Edit state for one topic's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationEditor {
    /// Topic being edited
    pub topic_id: TopicId,
    /// Raw input
    pub buffer: String,
    /// Value before editing started
    pub original: u32,
    /// Set when the last commit attempt was rejected
    pub invalid: bool,
    closed: bool,
}

impl DurationEditor {
    /// Opens the editor prefilled with the topic's current value.
    #[must_use]
    pub fn new(topic: &Topic) -> Self {
        Self {
            topic_id: topic.id.clone(),
            buffer: topic.estimated_minutes.to_string(),
            original: topic.estimated_minutes,
            invalid: false,
            closed: false,
        }
    }

    /// Attempts to commit the current input.
    ///
    /// Returns `None` and marks the input invalid when it does not parse.
    pub fn try_commit(&mut self) -> Option<DurationEditorEvent> {
        if let Some(minutes) = parse_minutes(&self.buffer) {
            self.closed = true;
            Some(DurationEditorEvent::Committed(self.topic_id.clone(), minutes))
        } else {
            tracing::debug!(input = %self.buffer, topic = %self.topic_id, "duration rejected");
            self.invalid = true;
            None
        }
    }

    /// Returns `true` when the typed value is above the suggested range.
    #[must_use]
    pub fn exceeds_advisory(&self) -> bool {
        parse_minutes(&self.buffer).is_some_and(|m| exceeds_advisory_max(m.get()))
    }
}

impl Component for DurationEditor {
    type Event = DurationEditorEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.buffer.len() < MAX_INPUT_LEN {
                    self.buffer.push(c);
                }
                self.invalid = false;
                None
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                self.invalid = false;
                None
            }
            KeyCode::Enter | KeyCode::Tab => self.try_commit(),
            KeyCode::Esc => {
                self.closed = true;
                Some(DurationEditorEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let input_style = if self.invalid {
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::styled("⏱ ", Style::default().fg(theme.accent)),
            Span::styled(format!("[{}▏]", self.buffer), input_style),
            Span::styled(" min  ", Style::default().fg(theme.text_secondary)),
        ];
        if self.invalid {
            spans.push(Span::styled(
                "Enter a positive number",
                Style::default().fg(theme.error),
            ));
        } else if self.exceeds_advisory() {
            spans.push(Span::styled(
                format!("Over {ADVISORY_MAX_MINUTES} min suggested"),
                Style::default().fg(theme.warning),
            ));
        } else {
            spans.push(Span::styled(
                "Enter save · Esc cancel",
                Style::default().fg(theme.text_muted),
            ));
        }

        let line = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
        f.render_widget(line, area);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
