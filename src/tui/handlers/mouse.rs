//! Mouse input: drag cards to reorder, click minutes to edit, wheel to scroll.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::board::{card_at, card_slots};
use crate::tui::AppState;

use super::action_handlers::{navigation, reorder, topic};
use super::popups::commit_duration_editor;

/// Handle a mouse event on the board
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    // Overlays and keyboard moves own the input
    if state.error_message.is_some()
        || state.help_overlay.is_some()
        || state.drag.as_ref().is_some_and(|d| !d.via_mouse)
    {
        return Ok(false);
    }

    let position = Position::new(mouse.column, mouse.row);
    let slots = card_slots(state, state.board_area());
    let hit = card_at(&slots, mouse.column, mouse.row).cloned();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(editor) = &state.duration_editor {
                let on_editor = hit
                    .as_ref()
                    .is_some_and(|s| s.id == editor.topic_id && s.minutes_row.contains(position));
                if !on_editor {
                    commit_duration_editor(state);
                }
                return Ok(false);
            }

            let Some(slot) = hit else {
                return Ok(false);
            };
            if slot.minutes_row.contains(position) {
                topic::open_duration_editor(state, &slot.id);
            } else {
                reorder::start_drag(state, slot.id, true);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(drag) = state.drag.as_mut() {
                drag.target = hit.map(|s| s.id);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.drag.is_some() {
                reorder::finish_drag(state, hit.map(|s| s.id));
            }
        }
        MouseEventKind::ScrollUp if state.drag.is_none() => {
            navigation::handle_navigate(state, -1)?;
        }
        MouseEventKind::ScrollDown if state.drag.is_none() => {
            navigation::handle_navigate(state, 1)?;
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::board::CardSlot;
    use crate::tui::test_support::app_state;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn slot(state: &AppState, index: usize) -> CardSlot {
        card_slots(state, state.board_area())
            .into_iter()
            .find(|s| s.index == index)
            .unwrap()
    }

    fn titles(state: &AppState) -> Vec<&str> {
        state.data.topics.iter().map(|t| t.title.as_str()).collect()
    }

    /// A cell on the card's title row
    fn title_cell(slot: &CardSlot) -> (u16, u16) {
        (slot.area.x + 2, slot.area.y + 1)
    }

    #[test]
    fn test_drag_onto_card_reorders() {
        let mut state = app_state(&["A", "B", "C"]);
        let (x0, y0) = title_cell(&slot(&state, 0));
        let (x2, y2) = title_cell(&slot(&state, 2));

        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x0, y0))
            .unwrap();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), x2, y2))
            .unwrap();
        assert_eq!(
            state.drag.as_ref().unwrap().target.as_ref(),
            Some(&state.data.topics[2].id)
        );
        handle_mouse_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), x2, y2))
            .unwrap();

        assert_eq!(titles(&state), ["B", "C", "A"]);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_release_off_board_is_noop() {
        let mut state = app_state(&["A", "B"]);
        let before = state.data.topics.clone();
        let (x, y) = title_cell(&slot(&state, 1));

        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y))
            .unwrap();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), x, 0))
            .unwrap();

        assert_eq!(state.data.topics, before);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_click_minutes_opens_editor_and_click_away_commits() {
        let mut state = app_state(&["A", "B"]);
        let target = slot(&state, 1);
        let (mx, my) = (target.minutes_row.x + 1, target.minutes_row.y);

        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), mx, my))
            .unwrap();
        assert_eq!(state.selected, 1);
        assert!(state.drag.is_none());

        state.duration_editor.as_mut().unwrap().buffer = "50".to_string();
        let (x0, y0) = title_cell(&slot(&state, 0));
        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x0, y0))
            .unwrap();

        assert!(state.duration_editor.is_none());
        assert_eq!(state.data.topics[1].estimated_minutes, 50);
    }

    #[test]
    fn test_wheel_moves_selection() {
        let mut state = app_state(&["A", "B"]);
        handle_mouse_event(&mut state, mouse(MouseEventKind::ScrollDown, 1, 1)).unwrap();
        assert_eq!(state.selected, 1);
        handle_mouse_event(&mut state, mouse(MouseEventKind::ScrollUp, 1, 1)).unwrap();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_ignored_during_keyboard_move() {
        let mut state = app_state(&["A", "B"]);
        let source = state.data.topics[0].id.clone();
        reorder::start_drag(&mut state, source, false);
        let (x, y) = title_cell(&slot(&state, 1));

        handle_mouse_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), x, y))
            .unwrap();
        assert!(state.drag.is_some());
        assert_eq!(titles(&state), ["A", "B"]);
    }
}
