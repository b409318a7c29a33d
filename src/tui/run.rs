//! Main TUI entry point and event loop.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, LevelFilter};
use ratatui::prelude::*;

use crate::config::Config;
use crate::profile::{
    AvatarUploader, ConsoleSubmitHandler, DiagnosticSink, LocalFileUploader, ProfileDraft,
    SettingsPage,
};

use super::app::{App, StatusKind};
use super::colors::TuiColors;
use super::input::{handle_key_event, Action};
use super::ui::draw;

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Tick rate for UI updates (in milliseconds).
const TICK_RATE_MS: u64 = 100;

/// Runs the settings page in the terminal until the user quits.
///
/// Submitted profiles go to the file configured as `submit_output`. Without
/// one they are held in memory while the alternate screen is active and
/// written to stderr once the terminal is restored.
///
/// # Arguments
///
/// * `config` - The loaded configuration
/// * `draft` - Values to prefill the form with, `None` for an empty form
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored, or if the
/// configured output file cannot be opened.
pub fn run_tui(config: &Config, draft: Option<ProfileDraft>) -> TuiResult<()> {
    let sink = DiagnosticSink::from_config(config, DiagnosticSink::Buffer(Vec::new()))?;
    let handler = ConsoleSubmitHandler::new(sink);
    let page = match draft {
        Some(draft) => SettingsPage::with_draft(draft, handler),
        None => SettingsPage::new(handler),
    };
    let mut app = App::new(page);
    let colors = TuiColors::from_config(config);
    let status_timeout = Duration::from_secs(config.status_message_timeout);

    // stderr shares the screen with the TUI
    let _log_pause = LogPause::new();

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal_state,
    )?;

    let result = run_event_loop(
        &mut terminal,
        &mut app,
        &colors,
        status_timeout,
        &LocalFileUploader,
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let buffered = app.page.handler_mut().writer_mut().take_buffered();
    if !buffered.is_empty() {
        io::stderr().write_all(&buffered)?;
    }
    debug!(
        "Settings page closed after {} submission(s)",
        app.page.submit_count()
    );

    result
}

/// Runs `setup`, calling `restore` before handing back an error.
///
/// Raw mode is already on when the alternate screen and the backend are set
/// up, so a failure there must not leave the terminal in that state.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> TuiResult<T>,
    restore: impl FnOnce(),
) -> TuiResult<T> {
    setup().inspect_err(|_| restore())
}

/// Best-effort terminal restore for the setup failure path.
fn restore_terminal_state() {
    if let Err(e) = disable_raw_mode() {
        debug!("Could not disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        debug!("Could not leave alternate screen: {}", e);
    }
}

/// Silences the logger while the TUI owns the terminal.
///
/// The previous level comes back on drop, so records logged after the
/// terminal is restored reach stderr again.
struct LogPause {
    previous: LevelFilter,
}

impl LogPause {
    fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { previous }
    }
}

impl Drop for LogPause {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Runs the main event loop.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    colors: &TuiColors,
    status_timeout: Duration,
    uploader: &dyn AvatarUploader,
) -> TuiResult<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, app, colors))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let action = handle_key_event(app, key);
                    perform_action(app, action, uploader);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.expire_status(status_timeout);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Executes an action returned by the input handler.
fn perform_action(app: &mut App, action: Action, uploader: &dyn AvatarUploader) {
    match action {
        Action::Submit => app.submit(),
        Action::AttachAvatar(path) => match app.attach_avatar(&path, uploader) {
            Ok(()) => app.set_status("Avatar attached.", StatusKind::Success),
            Err(e) => {
                debug!("Could not attach avatar: {}", e);
                app.set_status(format!("Could not attach avatar: {}", e), StatusKind::Error);
            }
        },
        Action::None => {}
    }
}
