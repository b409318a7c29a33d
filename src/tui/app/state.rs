//! Interaction states of the settings screen.

use crate::profile::ProfileField;

use super::super::text_input::TextInput;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Moving between sections and fields.
    Browsing,
    /// Typing into a text field.
    EditingField {
        /// The field being edited.
        field: ProfileField,
        /// Text typed so far, seeded with the draft value.
        text_input: TextInput,
    },
    /// Typing the path of an image to use as avatar.
    AvatarPrompt {
        /// Path typed so far.
        text_input: TextInput,
    },
}

impl AppState {
    /// The text input of the editing states.
    pub fn text_input(&self) -> Option<&TextInput> {
        match self {
            AppState::Browsing => None,
            AppState::EditingField { text_input, .. } | AppState::AvatarPrompt { text_input } => {
                Some(text_input)
            }
        }
    }

    /// Mutable access to the text input of the editing states.
    pub fn text_input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            AppState::Browsing => None,
            AppState::EditingField { text_input, .. } | AppState::AvatarPrompt { text_input } => {
                Some(text_input)
            }
        }
    }

    /// True while keystrokes go to a text input.
    pub fn is_typing(&self) -> bool {
        !matches!(self, AppState::Browsing)
    }
}
