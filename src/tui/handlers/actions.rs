//! Action dispatch for the board.

use anyhow::Result;

use crate::models::TopicStatus;
use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{board, navigation, reorder, topic};

/// Dispatch action to appropriate handler
///
/// Returns `true` when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate(state, -1),
        Action::NavigateDown => navigation::handle_navigate(state, 1),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),

        // Reordering
        Action::PickUpCard => reorder::handle_pick_up_card(state),
        Action::DropCard => reorder::handle_drop_card(state),
        Action::CancelDrag => reorder::handle_cancel_drag(state),
        Action::MoveCardUp => reorder::handle_move_card(state, -1),
        Action::MoveCardDown => reorder::handle_move_card(state, 1),

        // Topic editing
        Action::SetStatusNotStarted => topic::handle_set_status(state, TopicStatus::NotStarted),
        Action::SetStatusInProgress => topic::handle_set_status(state, TopicStatus::InProgress),
        Action::SetStatusCompleted => topic::handle_set_status(state, TopicStatus::Completed),
        Action::SetStatusDeferred => topic::handle_set_status(state, TopicStatus::Deferred),
        Action::EditDuration => topic::handle_edit_duration(state),
        Action::ToggleDetails => topic::handle_toggle_details(state),

        // Board
        Action::ResetAgenda => board::handle_reset(state),
        Action::Export => board::handle_export(state),
        Action::ToggleHelp => board::handle_toggle_help(state),
        Action::Quit => board::handle_quit(state),
        Action::Cancel => board::handle_cancel(state),
    }
}
