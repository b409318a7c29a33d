//! Application state for the settings TUI.
//!
//! The [`App`] wraps a [`SettingsPage`] and adds the purely presentational
//! bits: which section and field have focus, whether a text input is open,
//! and the status line.

use std::time::{Duration, Instant};

pub mod editing;
pub mod navigation;
pub mod state;

pub use state::AppState;

use crate::profile::{
    ConsoleSubmitHandler, DiagnosticSink, ProfileField, Section, SettingsPage,
};

/// The page as driven by the TUI: submissions go to a [`DiagnosticSink`].
pub type ConsolePage = SettingsPage<ConsoleSubmitHandler<DiagnosticSink>>;

/// Tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A transient message shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub set_at: Instant,
}

/// Main application struct managing TUI state and user interactions.
#[derive(Debug)]
pub struct App {
    /// The settings page holding the draft.
    pub page: ConsolePage,
    /// Current keyboard mode.
    pub state: AppState,
    /// Index into [`Section::ALL`] of the section shown.
    pub selected_section: usize,
    /// Index of the focused field within the section.
    pub selected_field: usize,
    /// Flag indicating the application should exit.
    pub should_quit: bool,
    /// Flag indicating whether the help overlay is visible.
    pub show_help: bool,
    /// Optional status message for user feedback.
    pub status_message: Option<StatusMessage>,
}

impl App {
    /// Creates an app showing the first section of `page`.
    pub fn new(page: ConsolePage) -> Self {
        Self {
            page,
            state: AppState::Browsing,
            selected_section: 0,
            selected_field: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
        }
    }

    /// The section currently shown.
    pub fn current_section(&self) -> Section {
        Section::ALL
            .get(self.selected_section)
            .copied()
            .unwrap_or(Section::YourProfile)
    }

    /// Fields of the current section, in form order.
    pub fn section_fields(&self) -> Vec<ProfileField> {
        self.current_section().fields()
    }

    /// The focused field, `None` for sections without fields.
    pub fn current_field(&self) -> Option<ProfileField> {
        self.section_fields().get(self.selected_field).copied()
    }

    /// Shows `text` in the status line.
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind,
            set_at: Instant::now(),
        });
    }

    /// Clears the status line.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clears the status line once it has been shown for `timeout`.
    /// A zero timeout keeps messages until replaced.
    pub fn expire_status(&mut self, timeout: Duration) {
        if timeout.is_zero() {
            return;
        }
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| m.set_at.elapsed() >= timeout)
        {
            self.clear_status();
        }
    }
}
