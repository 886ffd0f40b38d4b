//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{CONTEXT_DRAG, CONTEXT_MAIN};
use crate::tui::AppState;

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let context = if state.drag.is_some() {
        CONTEXT_DRAG
    } else {
        CONTEXT_MAIN
    };

    if let Some(action) = state.shortcuts.lookup(context, key) {
        tracing::trace!(context, action = action.id(), "key action");
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
