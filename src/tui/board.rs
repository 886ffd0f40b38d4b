//! Board widget: header, summary strip, topic cards, footer.
//!
//! Card geometry is computed by [`card_slots`], which both the renderer and
//! the mouse handler use, so a click always lands on the card that was drawn
//! under it.

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::board_title;
use crate::export::svg::wrap_text;
use crate::models::{Topic, TopicId};
use crate::services::agenda::exceeds_advisory_max;
use crate::services::logo::organization_initials;
use crate::tui::{AppState, Component};

/// Rows of a collapsed card: borders, title, status line, description.
pub const CARD_BASE_HEIGHT: u16 = 5;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Organization header
    pub header: Rect,
    /// Four summary cells
    pub summary: Rect,
    /// Scrollable card list
    pub board: Rect,
    /// Copyright and date line
    pub footer: Rect,
    /// Status messages and hints
    pub status: Rect,
}

/// Splits the terminal area into the board regions.
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Summary strip
            Constraint::Min(5),    // Cards
            Constraint::Length(1), // Footer
            Constraint::Length(5), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        summary: chunks[1],
        board: chunks[2],
        footer: chunks[3],
        status: chunks[4],
    }
}

/// Where one card is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    /// Position in the agenda
    pub index: usize,
    /// Topic drawn in this slot
    pub id: TopicId,
    /// Full card including borders
    pub area: Rect,
    /// Status/minutes row (click target for the duration editor)
    pub minutes_row: Rect,
}

/// Height of a card when drawn `width` columns wide.
#[must_use]
pub fn card_height(topic: &Topic, expanded: bool, width: u16) -> u16 {
    if !expanded {
        return CARD_BASE_HEIGHT;
    }
    let inner_width = usize::from(width.saturating_sub(2)).max(1);
    let detail_lines = wrap_text(&topic.detailed_description, inner_width).len();
    CARD_BASE_HEIGHT.saturating_add(u16::try_from(detail_lines + 1).unwrap_or(u16::MAX))
}

/// First card index to draw so the selected card is fully visible.
#[must_use]
pub fn first_visible(state: &AppState, board: Rect) -> usize {
    let topics = &state.data.topics;
    if topics.is_empty() {
        return 0;
    }
    let selected = state.selected.min(topics.len() - 1);
    let heights: Vec<u16> = topics
        .iter()
        .map(|t| card_height(t, state.expanded.contains(&t.id), board.width))
        .collect();

    let mut start = 0;
    while start < selected {
        let used: u32 = heights[start..=selected].iter().map(|h| u32::from(*h)).sum();
        if used <= u32::from(board.height) {
            break;
        }
        start += 1;
    }
    start
}

/// Lays out the visible cards inside `board`.
#[must_use]
pub fn card_slots(state: &AppState, board: Rect) -> Vec<CardSlot> {
    let start = first_visible(state, board);
    let mut slots = Vec::new();
    let mut y = board.y;

    for (index, topic) in state.data.topics.iter().enumerate().skip(start) {
        let remaining = board.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let wanted = card_height(topic, state.expanded.contains(&topic.id), board.width);
        let height = if wanted > remaining {
            if index != start {
                break;
            }
            remaining
        } else {
            wanted
        };

        let area = Rect::new(board.x, y, board.width, height);
        let minutes_row = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(2),
            area.width.saturating_sub(2),
            u16::from(height > 3),
        );
        slots.push(CardSlot {
            index,
            id: topic.id.clone(),
            area,
            minutes_row,
        });
        y = y.saturating_add(height);
    }
    slots
}

/// Finds the card under a terminal cell.
#[must_use]
pub fn card_at(slots: &[CardSlot], column: u16, row: u16) -> Option<&CardSlot> {
    let position = Position::new(column, row);
    slots.iter().find(|slot| slot.area.contains(position))
}

/// Board widget
pub struct BoardWidget;

impl BoardWidget {
    /// Render the organization header.
    pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let branding = &state.branding;
        let monogram_fg = branding.primary_color.contrasting_text().to_ratatui_color();

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", organization_initials(&state.data.organization_name)),
                Style::default()
                    .fg(monogram_fg)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                "Board Meeting Agenda",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", state.data.organization_category),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                "   x Export  r Reset  ? Help",
                Style::default().fg(theme.text_muted),
            ),
        ]);

        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(board_title(&state.data.organization_name))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(header, area);
    }

    /// Render the four summary cells.
    pub fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let summary = state.summary();
        let cells = [
            ("Topics", summary.total_topics.to_string(), theme.primary),
            ("In Progress", summary.in_progress_count.to_string(), theme.secondary),
            ("Completed", summary.completed_count.to_string(), theme.accent),
            ("Minutes", summary.total_minutes.to_string(), theme.text),
        ];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for ((label, value, color), column) in cells.into_iter().zip(columns.iter()) {
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(
                    value,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, Style::default().fg(theme.text_secondary))),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(theme.surface)),
            );
            f.render_widget(cell, *column);
        }
    }

    /// Render the visible topic cards.
    pub fn render_cards(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        if state.data.topics.is_empty() {
            let empty = Paragraph::new("No topics on the agenda. Press r to restore the default list.")
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
            return;
        }

        for slot in card_slots(state, area) {
            let topic = &state.data.topics[slot.index];
            Self::render_card(f, &slot, topic, state);

            if let Some(editor) = &state.duration_editor {
                if editor.topic_id == slot.id && slot.minutes_row.height > 0 {
                    editor.render(f, slot.minutes_row, theme);
                }
            }
        }
    }

    fn render_card(f: &mut Frame, slot: &CardSlot, topic: &Topic, state: &AppState) {
        let theme = &state.theme;
        let selected = slot.index == state.selected;
        let drag = state.drag.as_ref();
        let is_source = drag.is_some_and(|d| d.source == topic.id);
        let is_target = drag.is_some_and(|d| d.target.as_ref() == Some(&topic.id)) && !is_source;

        let (border_type, border_style) = if is_target {
            (BorderType::Double, Style::default().fg(theme.accent))
        } else if selected {
            (
                BorderType::Thick,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )
        } else if is_source {
            (BorderType::Plain, Style::default().fg(theme.text_muted))
        } else {
            (BorderType::Rounded, Style::default().fg(theme.primary))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(slot.area);
        f.render_widget(block, slot.area);

        let (badge_bg, badge_border) = topic.priority.badge_colors();
        let badge = format!(" {} ", topic.priority.badge());
        let marker = if is_source { "↕ " } else { "" };
        let title = format!("{marker}{}. {}", topic.order + 1, topic.title);
        let pad = usize::from(inner.width)
            .saturating_sub(title.chars().count() + badge.chars().count());

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    title,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(pad)),
                Span::styled(
                    badge,
                    Style::default()
                        .fg(badge_border.to_ratatui_color())
                        .bg(badge_bg.to_ratatui_color())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Self::meta_line(topic, selected, state),
            Line::from(Span::styled(
                topic.description.clone(),
                Style::default().fg(theme.text_secondary),
            )),
        ];

        if state.expanded.contains(&topic.id) {
            lines.push(Line::from(""));
            let width = usize::from(inner.width).max(1);
            lines.extend(wrap_text(&topic.detailed_description, width).into_iter().map(|l| {
                Line::from(Span::styled(
                    l,
                    Style::default()
                        .fg(theme.text_secondary)
                        .add_modifier(Modifier::ITALIC),
                ))
            }));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn meta_line(topic: &Topic, selected: bool, state: &AppState) -> Line<'static> {
        let theme = &state.theme;
        let status_color = topic.status.color().to_ratatui_color();
        let mut spans = vec![
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(
                topic.status.label(),
                Style::default().fg(status_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("⏱ {} min", topic.estimated_minutes),
                Style::default().fg(theme.text),
            ),
        ];
        if exceeds_advisory_max(topic.estimated_minutes) {
            spans.push(Span::styled(" (long)", Style::default().fg(theme.warning)));
        }
        if selected {
            spans.push(Span::styled(
                "   1-4 status · e minutes · d details · Space move",
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }

    /// Render the footer, dated at render time.
    pub fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
        let today = chrono::Local::now().date_naive();
        let text = format!(
            "© {} {} · Board meeting · {}",
            today.year(),
            state.data.organization_name,
            today.format("%B %-d, %Y")
        );
        let footer = Paragraph::new(text)
            .style(Style::default().fg(state.theme.text_muted).bg(state.theme.background))
            .alignment(Alignment::Center);
        f.render_widget(footer, area);
    }
}
