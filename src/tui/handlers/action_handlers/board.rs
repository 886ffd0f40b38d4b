// Board-level action handlers

use anyhow::Result;

use crate::export::DashboardSnapshot;
use crate::models::TopicId;
use crate::services::agenda;
use crate::tui::{AppState, HelpOverlay};

/// Rebuilds the agenda from the configured titles.
pub fn handle_reset(state: &mut AppState) -> Result<bool> {
    let dashboard = &state.config.dashboard;
    let topics = agenda::reset(&dashboard.titles, &dashboard.category, state.ids.as_mut());

    state.drag = None;
    state.duration_editor = None;
    state.expanded.clear();
    state.selected = 0;
    state.replace_topics(topics);
    state.set_status("Agenda reset");
    Ok(false)
}

/// Starts a background export of the board as currently shown.
pub fn handle_export(state: &mut AppState) -> Result<bool> {
    if state.export.is_busy() {
        state.set_status("Export already in progress");
        return Ok(false);
    }

    let mut expanded: Vec<TopicId> = state.expanded.iter().cloned().collect();
    expanded.sort();
    let snapshot = DashboardSnapshot::capture_today(&state.data, &state.branding, &expanded);

    let settings = &state.config.export;
    let renderer = settings.format.renderer(settings.scale);
    let output_dir = settings.resolved_output_dir();

    match state.export.start_export(snapshot, renderer, output_dir) {
        Ok(()) => state.set_status(format!("Exporting {}...", state.config.export.format)),
        Err(e) => state.set_error(format!("Export failed: {e:#}")),
    }
    Ok(false)
}

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.help_overlay.take().is_none() {
        state.help_overlay = Some(HelpOverlay::new(&state.shortcuts));
    }
    Ok(false)
}

/// Handle quit action
pub fn handle_quit(state: &mut AppState) -> Result<bool> {
    if state.export.is_busy() {
        tracing::warn!("quitting while an export is running");
    }
    state.should_quit = true;
    Ok(true)
}

/// Clears the status line.
pub fn handle_cancel(state: &mut AppState) -> Result<bool> {
    state.status_message.clear();
    Ok(false)
}
