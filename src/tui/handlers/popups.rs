//! Popup input handlers: help overlay and the inline minutes editor.

use anyhow::Result;
use crossterm::event;

use crate::tui::{AppState, Component, DurationEditorEvent, HelpOverlayEvent};

use super::action_handlers::topic;

/// Routes input to whichever popup is open.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.help_overlay.is_some() {
        return handle_help_overlay_input(state, key);
    }
    if state.duration_editor.is_some() {
        return handle_duration_editor_input(state, key);
    }
    Ok(false)
}

/// Handle input for help overlay
pub fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(help) = &mut state.help_overlay {
        if let Some(HelpOverlayEvent::Closed) = help.handle_input(key) {
            state.help_overlay = None;
        }
    }
    Ok(false)
}

/// Handle input for the minutes editor
pub fn handle_duration_editor_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let event = match &mut state.duration_editor {
        Some(editor) => editor.handle_input(key),
        None => return Ok(false),
    };
    apply_editor_event(state, event);
    Ok(false)
}

/// Commits the open editor because focus moved elsewhere.
///
/// Invalid input keeps the editor open. Returns `true` if the editor closed.
pub fn commit_duration_editor(state: &mut AppState) -> bool {
    let event = match &mut state.duration_editor {
        Some(editor) => editor.try_commit(),
        None => return true,
    };
    apply_editor_event(state, event);
    state.duration_editor.is_none()
}

fn apply_editor_event(state: &mut AppState, event: Option<DurationEditorEvent>) {
    match event {
        Some(DurationEditorEvent::Committed(id, minutes)) => {
            state.duration_editor = None;
            topic::apply_duration(state, &id, minutes);
        }
        Some(DurationEditorEvent::Cancelled) => {
            state.duration_editor = None;
            state.set_status("Edit cancelled");
        }
        None => {
            if state.duration_editor.as_ref().is_some_and(|e| e.invalid) {
                state.set_status("Estimated time must be a positive whole number");
            }
        }
    }
}
