//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::export::ExportStatus;
use crate::models::TopicId;
use crate::shortcuts::{Action, CONTEXT_DRAG, CONTEXT_MAIN};

use super::{AppState, Theme};

/// Hints shown on the bottom line, per context.
const MAIN_HINTS: [Action; 5] = [
    Action::PickUpCard,
    Action::EditDuration,
    Action::ToggleDetails,
    Action::Export,
    Action::ToggleHelp,
];
const DRAG_HINTS: [Action; 3] = [Action::NavigateDown, Action::DropCard, Action::CancelDrag];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut status_text: Vec<Line> = Vec::with_capacity(3);

        // First line: error, status message, or drag target
        if let Some(error) = &state.error_message {
            status_text.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            status_text.push(Line::from(state.status_message.as_str()));
        } else if let Some(line) = Self::drag_line(state, theme) {
            status_text.push(line);
        } else {
            status_text.push(Line::from(""));
        }

        status_text.push(Self::export_line(state, theme));
        status_text.push(Self::help_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn drag_line(state: &AppState, theme: &Theme) -> Option<Line<'static>> {
        let drag = state.drag.as_ref()?;
        let title_of = |id: &TopicId| {
            state
                .data
                .topics
                .iter()
                .find(|t| &t.id == id)
                .map_or_else(String::new, |t| t.title.clone())
        };

        let mut spans = vec![
            Span::styled("Moving: ", Style::default().fg(theme.accent)),
            Span::styled(
                title_of(&drag.source),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ];
        match &drag.target {
            Some(target) if *target != drag.source => {
                spans.push(Span::styled(" → ", Style::default().fg(theme.text_muted)));
                spans.push(Span::styled(title_of(target), Style::default().fg(theme.accent)));
            }
            _ => spans.push(Span::styled(
                " (no target)",
                Style::default().fg(theme.text_muted),
            )),
        }
        Some(Line::from(spans))
    }

    fn export_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let export = &state.export;
        let color = match export.status {
            ExportStatus::Idle => theme.text_muted,
            ExportStatus::Exporting => theme.warning,
            ExportStatus::Success => theme.success,
            ExportStatus::Failed => theme.error,
        };

        let mut spans = vec![
            Span::styled("Export: ", Style::default().fg(theme.primary)),
            Span::styled(export.status.to_string(), Style::default().fg(color)),
        ];
        if !export.last_message.is_empty() {
            spans.push(Span::styled(
                format!("  {}", export.last_message),
                Style::default().fg(theme.text_secondary),
            ));
        }
        Line::from(spans)
    }

    /// Bottom line of key hints, labelled from the shortcut registry.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let (context, actions): (&str, &[Action]) = if state.drag.is_some() {
            (CONTEXT_DRAG, &DRAG_HINTS)
        } else {
            (CONTEXT_MAIN, &MAIN_HINTS)
        };

        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];
        for (i, action) in actions.iter().enumerate() {
            let keys = state.shortcuts.keys_for(context, *action);
            let Some(key) = keys.first() else {
                continue;
            };
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key.clone(), Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(Self::hint(*action)));
        }
        Line::from(spans)
    }

    const fn hint(action: Action) -> &'static str {
        match action {
            Action::PickUpCard => "Move",
            Action::EditDuration => "Minutes",
            Action::ToggleDetails => "Details",
            Action::Export => "Export",
            Action::ToggleHelp => "Help",
            Action::NavigateDown => "Choose target",
            Action::DropCard => "Drop",
            Action::CancelDrag => "Cancel",
            other => other.description(),
        }
    }
}
