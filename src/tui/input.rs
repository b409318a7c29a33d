//! Keyboard input handling for the settings TUI.
//!
//! Input handlers only mutate the in-memory [`App`]. Anything that writes to
//! a submit handler or reads the filesystem is returned as an [`Action`] and
//! executed by the event loop in `run.rs`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::editing::CursorMove;
use super::app::App;
use crate::profile::Section;

/// Actions that may need to be performed outside the input handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Validate the draft and hand it to the submit handler.
    Submit,
    /// Use the image at the given path as avatar.
    AttachAvatar(String),
    /// No action required.
    None,
}

/// Handles a keyboard event and updates the application state accordingly.
///
/// `Ctrl+C` always quits. While the help overlay is shown any key closes it.
/// Otherwise keys go to the open text input, or drive navigation when no
/// input is open.
///
/// # Returns
///
/// An `Action` indicating if any follow-up operation is needed.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Action::None;
    }

    if app.show_help {
        app.show_help = false;
        return Action::None;
    }

    if app.state.is_typing() {
        handle_typing_keys(app, key)
    } else {
        handle_browsing_keys(app, key)
    }
}

/// Handles keys while a text input is open.
fn handle_typing_keys(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => {
            app.cancel_input();
            Action::None
        }
        KeyCode::Enter => app.confirm_input(),
        KeyCode::Backspace => {
            app.input_backspace();
            Action::None
        }
        KeyCode::Delete => {
            app.input_delete();
            Action::None
        }
        KeyCode::Left => {
            app.input_cursor(CursorMove::Left);
            Action::None
        }
        KeyCode::Right => {
            app.input_cursor(CursorMove::Right);
            Action::None
        }
        KeyCode::Home => {
            app.input_cursor(CursorMove::Home);
            Action::None
        }
        KeyCode::End => {
            app.input_cursor(CursorMove::End);
            Action::None
        }
        KeyCode::Char(c) => {
            app.input_char(c);
            Action::None
        }
        _ => Action::None,
    }
}

/// Handles keys while moving around the form.
fn handle_browsing_keys(app: &mut App, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => Action::Submit,
        KeyCode::Char('r') if ctrl => {
            app.reset_form();
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            Action::None
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            Action::None
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_section();
            } else {
                app.next_section();
            }
            Action::None
        }
        KeyCode::BackTab => {
            app.prev_section();
            Action::None
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::ALL.get(index) {
                app.follow_anchor(&section.anchor());
            }
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.prev_field();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_field();
            Action::None
        }
        KeyCode::Left if app.on_choice_field() => {
            app.prev_bucket();
            Action::None
        }
        KeyCode::Right if app.on_choice_field() => {
            app.next_bucket();
            Action::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.prev_section();
            Action::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_section();
            Action::None
        }
        KeyCode::Char('a') => {
            app.open_avatar_prompt();
            Action::None
        }
        KeyCode::Char('x') => {
            app.remove_avatar();
            Action::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.edit_current_field();
            Action::None
        }
        _ => Action::None,
    }
}
