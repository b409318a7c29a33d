use std::io;
use std::process::ExitCode;

use log::error;
use profile_settings::cli::{parse_cli_args, run_check};
use profile_settings::config::get_config;
use profile_settings::profile::{ConsoleSubmitHandler, DiagnosticSink};
use profile_settings::tui::run_tui;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    // Turn CLI arguments into a library object
    let invocation = match parse_cli_args() {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("profile-settings: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = get_config();

    if invocation.check {
        let sink = match DiagnosticSink::from_config(config, DiagnosticSink::Stderr) {
            Ok(sink) => sink,
            Err(e) => {
                error!("Cannot open submit output: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let draft = invocation.draft.unwrap_or_default();
        return match run_check(draft, ConsoleSubmitHandler::new(sink), &mut io::stdout()) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                error!("Submission failed: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run_tui(config, invocation.draft) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("profile-settings: {}", e);
            ExitCode::FAILURE
        }
    }
}
