// Card move action handlers

use anyhow::Result;

use crate::models::TopicId;
use crate::services::agenda;
use crate::tui::{AppState, DragState};

/// Handle pick up card action
pub fn handle_pick_up_card(state: &mut AppState) -> Result<bool> {
    let Some(topic) = state.selected_topic() else {
        state.set_status("Nothing to move");
        return Ok(false);
    };
    let source = topic.id.clone();
    let title = topic.title.clone();

    start_drag(state, source, false);
    state.set_status(format!(
        "Moving '{title}': choose a position, Space/Enter to drop, Esc to cancel"
    ));
    Ok(false)
}

/// Handle drop card action
pub fn handle_drop_card(state: &mut AppState) -> Result<bool> {
    let target = state.drag.as_ref().and_then(|d| d.target.clone());
    finish_drag(state, target);
    Ok(false)
}

/// Handle cancel drag action
pub fn handle_cancel_drag(state: &mut AppState) -> Result<bool> {
    if let Some(drag) = state.drag.take() {
        state.select_id(&drag.source);
        state.set_status("Move cancelled");
    }
    Ok(false)
}

/// Moves the selected card one place up or down.
pub fn handle_move_card(state: &mut AppState, delta: isize) -> Result<bool> {
    let Some(id) = state.selected_topic().map(|t| t.id.clone()) else {
        return Ok(false);
    };
    let topics = agenda::shift(&state.data.topics, &id, delta);
    state.replace_topics(topics);
    state.select_id(&id);
    Ok(false)
}

/// Begins moving `source`, with the card itself as the initial target.
pub fn start_drag(state: &mut AppState, source: TopicId, via_mouse: bool) {
    state.select_id(&source);
    state.drag = Some(DragState {
        target: Some(source.clone()),
        source,
        via_mouse,
    });
}

/// Ends the current move, dropping onto `target`.
///
/// A missing target, or dropping a card onto itself, leaves the agenda as it was.
pub fn finish_drag(state: &mut AppState, target: Option<TopicId>) {
    let Some(drag) = state.drag.take() else {
        return;
    };

    let moved = target.as_ref().is_some_and(|t| *t != drag.source);
    let topics = agenda::reorder(&state.data.topics, &drag.source, target.as_ref());
    state.replace_topics(topics);
    state.select_id(&drag.source);

    if moved {
        if let Some(topic) = state.selected_topic() {
            let message = format!("Moved '{}' to position {}", topic.title, topic.order + 1);
            state.set_status(message);
        }
    } else if !drag.via_mouse {
        state.set_status("Topic not moved");
    }
}
