//! Editing fields, picking the headcount bucket and submitting the form.

use std::path::Path;

use log::debug;

use crate::error::SettingsError;
use crate::profile::{AvatarUploader, FieldKind, SubmitOutcome};

use super::super::input::Action;
use super::super::text_input::TextInput;
use super::state::AppState;
use super::{App, StatusKind};

impl App {
    /// Activates the focused field.
    ///
    /// Text, URL and avatar fields open a text input seeded with the draft
    /// value; the headcount field moves to the next bucket.
    pub fn edit_current_field(&mut self) {
        let field = match self.current_field() {
            Some(f) => f,
            None => return,
        };

        match field.kind() {
            FieldKind::Choice => self.next_bucket(),
            FieldKind::Text | FieldKind::Url | FieldKind::Avatar => {
                let mut text_input = TextInput::new();
                text_input.set_text(self.page.draft().get(field).unwrap_or_default());
                self.state = AppState::EditingField { field, text_input };
            }
        }
    }

    /// Opens the avatar path prompt when the avatar field has focus.
    pub fn open_avatar_prompt(&mut self) {
        if self.current_field().map(|f| f.kind()) == Some(FieldKind::Avatar) {
            self.state = AppState::AvatarPrompt {
                text_input: TextInput::new(),
            };
        }
    }

    /// Clears the avatar when the avatar field has focus.
    pub fn remove_avatar(&mut self) {
        if self.current_field().map(|f| f.kind()) == Some(FieldKind::Avatar) {
            self.page.remove_avatar();
            self.set_status("Avatar removed.", StatusKind::Info);
        }
    }

    /// Closes the open text input, keeping the draft as it was.
    pub fn cancel_input(&mut self) {
        self.state = AppState::Browsing;
    }

    /// Closes the open text input and applies it.
    ///
    /// Field edits go straight into the draft. An avatar path is returned as
    /// [`Action::AttachAvatar`] because attaching touches the filesystem.
    pub fn confirm_input(&mut self) -> Action {
        match std::mem::replace(&mut self.state, AppState::Browsing) {
            AppState::EditingField { field, text_input } => {
                self.page.on_field_change(field, text_input.text());
                Action::None
            }
            AppState::AvatarPrompt { text_input } => {
                let path = text_input.text().trim().to_string();
                if path.is_empty() {
                    Action::None
                } else {
                    Action::AttachAvatar(path)
                }
            }
            AppState::Browsing => Action::None,
        }
    }

    /// Types a character into the open text input.
    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.state.text_input_mut() {
            input.insert_char(c);
        }
    }

    /// Backspace in the open text input.
    pub fn input_backspace(&mut self) {
        if let Some(input) = self.state.text_input_mut() {
            input.backspace();
        }
    }

    /// Delete in the open text input.
    pub fn input_delete(&mut self) {
        if let Some(input) = self.state.text_input_mut() {
            input.delete();
        }
    }

    /// Moves the cursor of the open text input.
    pub fn input_cursor(&mut self, movement: CursorMove) {
        if let Some(input) = self.state.text_input_mut() {
            match movement {
                CursorMove::Left => input.move_cursor_left(),
                CursorMove::Right => input.move_cursor_right(),
                CursorMove::Home => input.move_cursor_home(),
                CursorMove::End => input.move_cursor_end(),
            }
        }
    }

    /// Selects the next headcount bucket.
    pub fn next_bucket(&mut self) {
        let bucket = self.page.selected_employee_bucket().unwrap_or_default();
        self.page.select_employee_bucket(bucket.next());
    }

    /// Selects the previous headcount bucket.
    pub fn prev_bucket(&mut self) {
        let bucket = self.page.selected_employee_bucket().unwrap_or_default();
        self.page.select_employee_bucket(bucket.prev());
    }

    /// True when the headcount field has focus.
    pub fn on_choice_field(&self) -> bool {
        self.current_field().map(|f| f.kind()) == Some(FieldKind::Choice)
    }

    /// Discards all edits, the "Cancel" button.
    pub fn reset_form(&mut self) {
        self.page.reset();
        self.state = AppState::Browsing;
        self.set_status("Changes discarded.", StatusKind::Info);
    }

    /// Submits the page and reports the outcome in the status line.
    ///
    /// On a validation failure, focus jumps to the first invalid field.
    pub fn submit(&mut self) {
        match self.page.on_submit() {
            Ok(SubmitOutcome::Submitted(profile)) => {
                self.set_status(
                    format!("Saved profile for {}.", profile.company_name),
                    StatusKind::Success,
                );
            }
            Ok(SubmitOutcome::Invalid(errors)) => {
                if let Some(first) = errors.first() {
                    self.focus_field(first.field);
                }
                self.set_status(
                    format!("{} field(s) need attention.", errors.len()),
                    StatusKind::Error,
                );
            }
            Err(e) => {
                self.set_status(format!("Could not save: {}", e), StatusKind::Error);
            }
        }
    }

    /// Uses the image at `path` as avatar.
    pub fn attach_avatar(
        &mut self,
        path: &str,
        uploader: &dyn AvatarUploader,
    ) -> Result<(), SettingsError> {
        debug!("Attaching avatar from {}", path);
        self.page.attach_avatar(Path::new(path), uploader)
    }
}

/// Cursor movements inside a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}
