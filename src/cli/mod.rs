//! Command line interface.
//!
//! Parses arguments with clap, sets up logging, loads the config and the
//! optional draft, and implements the headless `--check` mode.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::trace;

use crate::config::{load_or_create_config, set_global_config, Config};
use crate::error::SettingsError;
use crate::profile::{ProfileDraft, SettingsPage, SubmitHandler, SubmitOutcome};

/// The struct for Clap CLI arguments.
/// Doc strings on the fields double as `--help` text.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Opts {
    /// Path to a config file. Defaults to ~/.profile-settings/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file to prefill the form with
    #[arg(short, long)]
    draft: Option<PathBuf>,

    /// Validate the draft without opening the TUI.
    /// Exits with 1 if any field is invalid
    #[arg(long)]
    check: bool,

    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What the binary should do, built from the command line.
#[derive(Debug)]
pub struct Invocation {
    /// The loaded config, with the command line's verbosity applied.
    pub config: Config,
    /// The draft to prefill the page with.
    pub draft: Option<ProfileDraft>,
    /// Run headless validation instead of the TUI.
    pub check: bool,
}

/// Parse CLI Arguments turns a Clap Opts struct, seen above, into an
/// [`Invocation`]. Also initialises logging and the global config.
///
/// # Errors
///
/// Returns an error if the config or the draft file cannot be read.
pub fn parse_cli_args() -> Result<Invocation, SettingsError> {
    invocation_from_opts(Opts::parse(), true)
}

/// Builds the invocation from already parsed options.
fn invocation_from_opts(opts: Opts, init_logging: bool) -> Result<Invocation, SettingsError> {
    let mut config = load_or_create_config(opts.config.as_deref())?;
    config.verbose = config.verbose.max(opts.verbose);

    if init_logging {
        let min_log_level = match config.verbose {
            0 => "Warn",
            1 => "Info",
            2 => "Debug",
            _ => "Trace",
        };
        env_logger::init_from_env(
            env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, min_log_level),
        );
    }

    trace!("Program was called with CLI");
    trace!("Parsed the arguments: {:?}", opts);

    let draft = opts.draft.as_deref().map(read_draft_file).transpose()?;

    set_global_config(config.clone());

    Ok(Invocation {
        config,
        draft,
        check: opts.check,
    })
}

/// When the CLI is called with `--draft` this reads the file.
pub fn read_draft_file(path: &Path) -> Result<ProfileDraft, SettingsError> {
    trace!("Reading draft from {}", path.display());
    ProfileDraft::from_json_file(path)
}

/// Validates `draft` and submits it to `handler` if it passes.
///
/// Every field error is written to `out` as one `field: message` line.
///
/// # Returns
///
/// `true` if the draft was valid and handed to the handler.
///
/// # Errors
///
/// Returns an error if the handler fails or `out` cannot be written.
pub fn run_check<H: SubmitHandler, W: Write>(
    draft: ProfileDraft,
    handler: H,
    out: &mut W,
) -> Result<bool, SettingsError> {
    let mut page = SettingsPage::with_draft(draft, handler);
    match page.on_submit()? {
        SubmitOutcome::Submitted(_) => Ok(true),
        SubmitOutcome::Invalid(errors) => {
            for error in &errors {
                writeln!(out, "{}", error)?;
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ConsoleSubmitHandler, ProfileField};
    use serial_test::serial;
    use std::ffi::OsStr;

    fn acme_draft() -> ProfileDraft {
        ProfileDraft::default()
            .with_value(ProfileField::UserAvatar, "https://img.example.com/a.png")
            .with_value(ProfileField::CompanyName, "Acme")
            .with_value(ProfileField::CompanyWebsite, "https://acme.io")
            .with_value(ProfileField::CompanyLinkedin, "https://linkedin.com/acme")
            .with_value(ProfileField::CompanyIndustry, "Tech")
            .with_value(ProfileField::CompanyDescription, "We build things")
            .with_value(ProfileField::CompanyGoals, "Grow")
            .with_value(ProfileField::Headquarters, "NYC")
            .with_value(ProfileField::FoundingRound, "Seed")
            .with_value(ProfileField::Faqs, "None")
    }

    #[test]
    fn test_opts_parse_flags() {
        let opts = Opts::parse_from(["profile-settings", "--check", "-vv", "-d", "draft.json"]);
        assert!(opts.check);
        assert_eq!(opts.verbose, 2);
        assert_eq!(opts.draft, Some(PathBuf::from("draft.json")));
        assert_eq!(opts.config, None);
    }

    #[test]
    #[serial]
    fn test_invocation_reads_config_and_draft() {
        let dir = std::env::temp_dir().join(format!("profile-settings-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config.toml");
        let draft_path = dir.join("draft.json");
        std::fs::write(&draft_path, r#"{"companyName":"Acme"}"#).unwrap();

        let opts = Opts::parse_from([
            OsStr::new("profile-settings"),
            OsStr::new("--config"),
            config_path.as_os_str(),
            OsStr::new("--draft"),
            draft_path.as_os_str(),
            OsStr::new("-v"),
        ]);
        let invocation = invocation_from_opts(opts, false).unwrap();

        assert!(config_path.exists());
        assert_eq!(invocation.config.verbose, 1);
        assert!(!invocation.check);
        let draft = invocation.draft.unwrap();
        assert_eq!(draft.get(ProfileField::CompanyName), Some("Acme"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_check_valid_draft() {
        let mut out = Vec::new();
        let mut submitted = Vec::new();
        let ok = run_check(acme_draft(), ConsoleSubmitHandler::new(&mut submitted), &mut out).unwrap();

        assert!(ok);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(submitted).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_run_check_reports_each_error() {
        let draft = acme_draft()
            .with_value(ProfileField::CompanyWebsite, "not-a-url")
            .with_value(ProfileField::EmployeeCompt, "50-100");
        let mut out = Vec::new();
        let mut submitted = Vec::new();
        let ok = run_check(draft, ConsoleSubmitHandler::new(&mut submitted), &mut out).unwrap();

        assert!(!ok);
        assert!(submitted.is_empty());
        let report = String::from_utf8(out).unwrap();
        assert_eq!(
            report.lines().collect::<Vec<_>>(),
            vec![
                "companyWebsite: Invalid url",
                "employeeCompt: Invalid enum value. Expected '1-10' | '10-100' | '100-500' | '1000+', received '50-100'",
            ]
        );
    }
}
