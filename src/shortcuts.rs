//! Centralized shortcut and action system.
//!
//! Maps key events to board actions per input context, and provides the
//! key labels shown in the help overlay and the status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::fmt;

/// Input context for the board itself.
pub const CONTEXT_MAIN: &str = "main";

/// Input context while a card is picked up for a keyboard drag.
pub const CONTEXT_DRAG: &str = "drag";

/// All possible actions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    JumpToFirst,
    JumpToLast,

    // === REORDERING ===
    PickUpCard,
    DropCard,
    CancelDrag,
    MoveCardUp,
    MoveCardDown,

    // === TOPIC EDITING ===
    SetStatusNotStarted,
    SetStatusInProgress,
    SetStatusCompleted,
    SetStatusDeferred,
    EditDuration,
    ToggleDetails,

    // === BOARD ===
    ResetAgenda,
    Export,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Actions listed in the help overlay, in display order.
    pub const HELP_ORDER: [Self; 18] = [
        Self::NavigateUp,
        Self::NavigateDown,
        Self::JumpToFirst,
        Self::JumpToLast,
        Self::PickUpCard,
        Self::MoveCardUp,
        Self::MoveCardDown,
        Self::SetStatusNotStarted,
        Self::SetStatusInProgress,
        Self::SetStatusCompleted,
        Self::SetStatusDeferred,
        Self::EditDuration,
        Self::ToggleDetails,
        Self::ResetAgenda,
        Self::Export,
        Self::ToggleHelp,
        Self::Quit,
        Self::Cancel,
    ];

    /// Stable identifier used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::PickUpCard => "pick_up_card",
            Self::DropCard => "drop_card",
            Self::CancelDrag => "cancel_drag",
            Self::MoveCardUp => "move_card_up",
            Self::MoveCardDown => "move_card_down",
            Self::SetStatusNotStarted => "status_not_started",
            Self::SetStatusInProgress => "status_in_progress",
            Self::SetStatusCompleted => "status_completed",
            Self::SetStatusDeferred => "status_deferred",
            Self::EditDuration => "edit_duration",
            Self::ToggleDetails => "toggle_details",
            Self::ResetAgenda => "reset_agenda",
            Self::Export => "export",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// One-line description for the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NavigateUp => "Select previous topic",
            Self::NavigateDown => "Select next topic",
            Self::JumpToFirst => "Select first topic",
            Self::JumpToLast => "Select last topic",
            Self::PickUpCard => "Pick up topic (move, then Space/Enter to drop, Esc to cancel)",
            Self::DropCard => "Drop topic here",
            Self::CancelDrag => "Cancel move",
            Self::MoveCardUp => "Move topic up",
            Self::MoveCardDown => "Move topic down",
            Self::SetStatusNotStarted => "Mark Not Started",
            Self::SetStatusInProgress => "Mark In Progress",
            Self::SetStatusCompleted => "Mark Completed",
            Self::SetStatusDeferred => "Mark Deferred",
            Self::EditDuration => "Edit estimated minutes",
            Self::ToggleDetails => "Show/hide details",
            Self::ResetAgenda => "Reset agenda",
            Self::Export => "Export snapshot",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
            Self::Cancel => "Close dialog / clear message",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys: the character already carries it,
    /// and terminals disagree on whether to report the modifier.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "Shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) if self.modifiers.contains(KeyModifiers::CONTROL) => {
                write!(f, "{}", c.to_ascii_uppercase())
            }
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "Esc"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_drag_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MAIN;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === REORDERING ===
        self.register(ctx, K::Char(' '), M::NONE, Action::PickUpCard);
        self.register(ctx, K::Up, M::SHIFT, Action::MoveCardUp);
        self.register(ctx, K::Down, M::SHIFT, Action::MoveCardDown);
        self.register(ctx, K::Char('K'), M::NONE, Action::MoveCardUp);
        self.register(ctx, K::Char('J'), M::NONE, Action::MoveCardDown);

        // === TOPIC EDITING ===
        self.register(ctx, K::Char('1'), M::NONE, Action::SetStatusNotStarted);
        self.register(ctx, K::Char('2'), M::NONE, Action::SetStatusInProgress);
        self.register(ctx, K::Char('3'), M::NONE, Action::SetStatusCompleted);
        self.register(ctx, K::Char('4'), M::NONE, Action::SetStatusDeferred);
        self.register(ctx, K::Char('e'), M::NONE, Action::EditDuration);
        self.register(ctx, K::Enter, M::NONE, Action::EditDuration);
        self.register(ctx, K::Char('d'), M::NONE, Action::ToggleDetails);

        // === BOARD ===
        self.register(ctx, K::Char('r'), M::NONE, Action::ResetAgenda);
        self.register(ctx, K::Char('x'), M::NONE, Action::Export);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    fn register_drag_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_DRAG;

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char(' '), M::NONE, Action::DropCard);
        self.register(ctx, K::Enter, M::NONE, Action::DropCard);
        self.register(ctx, K::Esc, M::NONE, Action::CancelDrag);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Key labels bound to `action` in `context`, sorted for stable display.
    #[must_use]
    pub fn keys_for(&self, context: &str, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|((ctx, _), bound)| ctx == context && **bound == action)
            .map(|((_, binding), _)| binding.to_string())
            .collect();
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
