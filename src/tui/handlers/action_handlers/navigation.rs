// Navigation action handlers

use anyhow::Result;

use crate::tui::AppState;

/// Moves the selection by `delta` cards, clamped to the agenda.
///
/// While a card is being moved the selection doubles as the drop target.
pub fn handle_navigate(state: &mut AppState, delta: isize) -> Result<bool> {
    let last = state.data.topics.len().saturating_sub(1);
    let next = state
        .selected
        .checked_add_signed(delta)
        .unwrap_or(0)
        .min(last);
    select(state, next);
    Ok(false)
}

/// Handle jump to first action
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    select(state, 0);
    Ok(false)
}

/// Handle jump to last action
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    select(state, state.data.topics.len().saturating_sub(1));
    Ok(false)
}

fn select(state: &mut AppState, index: usize) {
    state.selected = index;
    let target = state.selected_topic().map(|t| t.id.clone());
    if let Some(drag) = &mut state.drag {
        drag.target = target;
    }
    state.clear_error();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::app_state;
    use crate::tui::DragState;

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = app_state(&["A", "B", "C"]);
        handle_navigate(&mut state, -1).unwrap();
        assert_eq!(state.selected, 0);

        handle_navigate(&mut state, 1).unwrap();
        handle_navigate(&mut state, 1).unwrap();
        handle_navigate(&mut state, 1).unwrap();
        assert_eq!(state.selected, 2);

        handle_jump_to_first(&mut state).unwrap();
        assert_eq!(state.selected, 0);
        handle_jump_to_last(&mut state).unwrap();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_navigation_moves_drag_target() {
        let mut state = app_state(&["A", "B", "C"]);
        let source = state.data.topics[0].id.clone();
        state.drag = Some(DragState {
            source: source.clone(),
            target: Some(source),
            via_mouse: false,
        });

        handle_navigate(&mut state, 1).unwrap();
        let drag = state.drag.as_ref().unwrap();
        assert_eq!(drag.target.as_ref(), Some(&state.data.topics[1].id));
    }

    #[test]
    fn test_navigation_on_empty_agenda() {
        let mut state = app_state(&["A"]);
        state.replace_topics(Vec::new());
        handle_navigate(&mut state, 1).unwrap();
        handle_jump_to_last(&mut state).unwrap();
        assert_eq!(state.selected, 0);
        assert!(state.selected_topic().is_none());
    }
}
