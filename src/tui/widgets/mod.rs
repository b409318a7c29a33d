//! Widget components for the settings TUI.
//!
//! - [`nav_bar`]: The section list on the left
//! - [`form_panel`]: The fields of the current section

pub mod form_panel;
pub mod nav_bar;

pub use form_panel::{FormFocus, FormPanel};
pub use nav_bar::NavBar;
