//! Keyboard event handling.
//!
//! This module manages keyboard input:
//! - `j` / `Down`: next record
//! - `k` / `Up`: previous record
//! - `Home` / `End`: first / last record
//! - `J` / `K`: scroll the detail pane
//! - `PageDown` / `PageUp` (or `Ctrl+D` / `Ctrl+U`): page the detail pane
//! - `g`: toggle the GC content line
//! - `t`: toggle the protein translation block
//! - `b`: toggle the base composition chart
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:h` or `:help`: show help
//!   - `:<number>`: jump to a record
//! - `q` or `Ctrl+C`: quit

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Select the next record
    SelectNext,
    /// Select the previous record
    SelectPrev,
    /// Select the first record
    SelectFirst,
    /// Select the last record
    SelectLast,
    /// Scroll the detail pane down by one line
    ScrollDown,
    /// Scroll the detail pane up by one line
    ScrollUp,
    /// Scroll the detail pane down by one page
    PageDown,
    /// Scroll the detail pane up by one page
    PageUp,
    /// Toggle the GC content line
    ToggleGc,
    /// Toggle the protein translation block
    ToggleTranslation,
    /// Toggle the base composition chart
    ToggleBasePlot,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Dismiss the help overlay
    DismissHelp,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode, show_help),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events in normal mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    // Handle Ctrl+C for emergency quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // Handle Ctrl+U / Ctrl+D for paging
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
        return Action::PageUp;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('d') {
        return Action::PageDown;
    }

    match key.code {
        // Record navigation
        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
        KeyCode::Home => Action::SelectFirst,
        KeyCode::End => Action::SelectLast,

        // Detail pane scrolling (uppercase = scroll instead of select)
        KeyCode::Char('J') => Action::ScrollDown,
        KeyCode::Char('K') => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,

        // Display toggles (checkbox equivalents)
        KeyCode::Char('g') => Action::ToggleGc,
        KeyCode::Char('t') => Action::ToggleTranslation,
        KeyCode::Char('b') => Action::ToggleBasePlot,

        // Command mode
        KeyCode::Char(':') => Action::EnterCommandMode,

        // Quick quit
        KeyCode::Char('q') => Action::Quit,

        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::SelectNext => {
            state.select_next();
        }
        Action::SelectPrev => {
            state.select_prev();
        }
        Action::SelectFirst => {
            state.select_first();
        }
        Action::SelectLast => {
            state.select_last();
        }
        Action::ScrollDown => {
            state.scroll_down();
        }
        Action::ScrollUp => {
            state.scroll_up();
        }
        Action::PageDown => {
            state.page_down();
        }
        Action::PageUp => {
            state.page_up();
        }
        Action::ToggleGc => {
            state.toggle_gc();
        }
        Action::ToggleTranslation => {
            state.toggle_translation();
        }
        Action::ToggleBasePlot => {
            state.toggle_base_plot();
        }
        Action::EnterCommandMode => {
            state.enter_command_mode();
        }
        Action::CommandChar(c) => {
            state.command_input(c);
        }
        Action::ExecuteCommand => {
            state.execute_command();
        }
        Action::CancelCommand => {
            state.cancel_command();
        }
        Action::CommandBackspace => {
            state.command_backspace();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::Resize(_, _) => {
            // Resize is handled in the main loop with actual terminal dimensions
        }
    }

    !state.should_quit
}
