//! A company profile settings form.
//!
//! The [`profile`] module holds the form itself: an immutable draft, a
//! table-driven validator and the [`SettingsPage`] that runs the submit cycle
//! and hands valid profiles to a [`SubmitHandler`]. The [`tui`] module draws
//! the page in a terminal, and [`cli`] wires both up for the binary.
//!
//! ```
//! use profile_settings::{ConsoleSubmitHandler, ProfileField, SettingsPage, SubmitOutcome};
//!
//! let mut page = SettingsPage::new(ConsoleSubmitHandler::new(Vec::new()));
//! page.on_field_change(ProfileField::CompanyName, "Acme");
//!
//! match page.on_submit().unwrap() {
//!     SubmitOutcome::Invalid(errors) => assert!(!errors.is_empty()),
//!     SubmitOutcome::Submitted(_) => unreachable!(),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod tui;

pub use error::SettingsError;
pub use profile::{
    validate, ConsoleSubmitHandler, ProfileDraft, ProfileField, ProfileFormData, SettingsPage,
    SubmitHandler, SubmitOutcome,
};
