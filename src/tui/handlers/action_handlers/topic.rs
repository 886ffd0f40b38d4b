// Topic editing action handlers

use std::num::NonZeroU32;

use anyhow::Result;

use crate::models::{TopicId, TopicStatus};
use crate::services::agenda;
use crate::tui::{AppState, DurationEditor};

/// Sets the selected topic's status.
pub fn handle_set_status(state: &mut AppState, status: TopicStatus) -> Result<bool> {
    let Some(topic) = state.selected_topic() else {
        return Ok(false);
    };
    let id = topic.id.clone();
    let title = topic.title.clone();

    let topics = agenda::set_status(&state.data.topics, &id, status);
    state.replace_topics(topics);
    tracing::debug!(topic = %id, %status, "status changed");
    state.set_status(format!("'{title}' marked {status}"));
    Ok(false)
}

/// Opens the minutes editor on the selected topic.
pub fn handle_edit_duration(state: &mut AppState) -> Result<bool> {
    if let Some(topic) = state.selected_topic() {
        state.duration_editor = Some(DurationEditor::new(topic));
        state.set_status("Type minutes, Enter to save, Esc to cancel");
    }
    Ok(false)
}

/// Opens the minutes editor on the topic with `id` (mouse click on its minutes).
pub fn open_duration_editor(state: &mut AppState, id: &TopicId) {
    state.select_id(id);
    if let Some(topic) = state.data.topics.iter().find(|t| &t.id == id) {
        state.duration_editor = Some(DurationEditor::new(topic));
    }
}

/// Stores a committed duration.
pub fn apply_duration(state: &mut AppState, id: &TopicId, minutes: NonZeroU32) {
    let topics = agenda::set_duration(&state.data.topics, id, minutes);
    state.replace_topics(topics);
    tracing::debug!(topic = %id, minutes = minutes.get(), "duration changed");

    let mut message = format!("Estimated time set to {minutes} min");
    if agenda::exceeds_advisory_max(minutes.get()) {
        message.push_str(&format!(
            " (longer than the suggested {} min)",
            agenda::ADVISORY_MAX_MINUTES
        ));
    }
    state.set_status(message);
}

/// Shows or hides the selected topic's detailed description.
pub fn handle_toggle_details(state: &mut AppState) -> Result<bool> {
    if let Some(id) = state.selected_topic().map(|t| t.id.clone()) {
        if !state.expanded.remove(&id) {
            state.expanded.insert(id);
        }
    }
    Ok(false)
}
