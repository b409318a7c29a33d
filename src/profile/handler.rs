//! Submit handlers: where validated profiles go.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use log::info;

use super::model::ProfileFormData;
use crate::config::Config;
use crate::error::SettingsError;

/// Receives every profile that passed validation.
pub trait SubmitHandler {
    /// Handles one validated profile.
    fn submit(&mut self, profile: &ProfileFormData) -> Result<(), SettingsError>;
}

impl<H: SubmitHandler + ?Sized> SubmitHandler for Box<H> {
    fn submit(&mut self, profile: &ProfileFormData) -> Result<(), SettingsError> {
        (**self).submit(profile)
    }
}

/// Adapts a closure into a [`SubmitHandler`].
///
/// ```
/// use profile_settings::profile::{FnSubmitHandler, SubmitHandler};
///
/// let mut seen = Vec::new();
/// let mut handler = FnSubmitHandler::new(|p: &profile_settings::profile::ProfileFormData| {
///     seen.push(p.company_name.clone());
///     Ok(())
/// });
/// # let _ = &mut handler;
/// ```
pub struct FnSubmitHandler<F> {
    f: F,
}

impl<F> FnSubmitHandler<F>
where
    F: FnMut(&ProfileFormData) -> Result<(), SettingsError>,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SubmitHandler for FnSubmitHandler<F>
where
    F: FnMut(&ProfileFormData) -> Result<(), SettingsError>,
{
    fn submit(&mut self, profile: &ProfileFormData) -> Result<(), SettingsError> {
        (self.f)(profile)
    }
}

impl<F> std::fmt::Debug for FnSubmitHandler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSubmitHandler").finish_non_exhaustive()
    }
}

/// Writes each submitted profile as one line of JSON.
#[derive(Debug)]
pub struct ConsoleSubmitHandler<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSubmitHandler<W> {
    /// Creates a handler writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Mutable access to the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the handler, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmitHandler for ConsoleSubmitHandler<W> {
    fn submit(&mut self, profile: &ProfileFormData) -> Result<(), SettingsError> {
        let json = serde_json::to_string(profile)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        info!("Submitted profile for {}", profile.company_name);
        Ok(())
    }
}

/// Destination of the console handler.
#[derive(Debug)]
pub enum DiagnosticSink {
    /// Standard error.
    Stderr,
    /// A file opened for appending.
    File(File),
    /// Held in memory until someone drains it.
    Buffer(Vec<u8>),
}

impl DiagnosticSink {
    /// Picks the sink configured in `config`.
    ///
    /// When no output file is configured, `fallback` is used.
    pub fn from_config(config: &Config, fallback: DiagnosticSink) -> Result<Self, SettingsError> {
        match &config.submit_output {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(DiagnosticSink::File(file))
            }
            None => Ok(fallback),
        }
    }

    /// Takes whatever has been buffered so far. Empty for unbuffered sinks.
    pub fn take_buffered(&mut self) -> Vec<u8> {
        match self {
            DiagnosticSink::Buffer(buf) => std::mem::take(buf),
            _ => Vec::new(),
        }
    }
}

impl Write for DiagnosticSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DiagnosticSink::Stderr => io::stderr().write(buf),
            DiagnosticSink::File(file) => file.write(buf),
            DiagnosticSink::Buffer(vec) => vec.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DiagnosticSink::Stderr => io::stderr().flush(),
            DiagnosticSink::File(file) => file.flush(),
            DiagnosticSink::Buffer(_) => Ok(()),
        }
    }
}
