//! TUI for the settings page.
//!
//! This module draws the company profile form with Ratatui and drives it
//! from the keyboard.

pub mod app;
pub mod colors;
pub mod input;
pub mod text_input;
pub mod ui;
pub mod widgets;

mod run;

pub use run::{run_tui, TuiResult};
