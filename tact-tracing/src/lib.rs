//! Logging setup and coloured console output for the tact binaries.

use ansi_term::Colour;
use std::{env, io};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::MakeWriter,
};

pub fn println_green(txt: &str) {
    tracing::info!("{}", Colour::Green.paint(txt));
}

pub fn println_red_err(txt: &str) {
    tracing::error!("{}", Colour::Red.paint(txt));
}

pub fn println_yellow_err(txt: &str) {
    tracing::warn!("{}", Colour::Yellow.paint(txt));
}

/// Prints a compiler diagnostic as a bold red `error:` header followed by the
/// message, and a location line when one is known.
pub fn println_diagnostic(message: &str, location: Option<&str>) {
    let header = Colour::Red.bold().paint("error");
    tracing::error!("{header}: {message}");
    if let Some(location) = location {
        tracing::error!(" --> {location}");
    }
}

const LOG_FILTER: &str = "RUST_LOG";

// ERROR and WARN go to stderr, everything else to stdout.
struct StdioTracingWriter {
    writer_mode: TracingWriterMode,
}

impl<'a> MakeWriter<'a> for StdioTracingWriter {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.writer_mode {
            TracingWriterMode::Stderr => Box::new(io::stderr()),
            _ => Box::new(io::stdout()),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if self.writer_mode.is_stderr(meta.level()) {
            return Box::new(io::stderr());
        }
        Box::new(io::stdout())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TracingWriterMode {
    /// Write ERROR and WARN to stderr and everything else to stdout.
    #[default]
    Stdio,
    /// Write everything to stdout.
    Stdout,
    /// Write everything to stderr.
    Stderr,
}

impl TracingWriterMode {
    fn is_stderr(self, level: &Level) -> bool {
        match self {
            TracingWriterMode::Stdio => level <= &Level::WARN,
            TracingWriterMode::Stdout => false,
            TracingWriterMode::Stderr => true,
        }
    }
}

#[derive(Debug, Default)]
pub struct TracingSubscriberOptions {
    pub verbosity: Option<u8>,
    pub silent: Option<bool>,
    pub log_level: Option<LevelFilter>,
    pub writer_mode: Option<TracingWriterMode>,
}

impl TracingSubscriberOptions {
    /// The level that overrides `RUST_LOG`, if any. An explicit level wins over
    /// `-v`/`-vv`, which wins over silent mode.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .or_else(|| match self.verbosity {
                Some(1) => Some(LevelFilter::DEBUG),
                Some(v) if v >= 2 => Some(LevelFilter::TRACE),
                _ => None,
            })
            .or_else(|| match self.silent {
                Some(true) => Some(LevelFilter::OFF),
                _ => None,
            })
    }
}

/// Installs the global subscriber. Output looks like plain `println!` text: no
/// timestamps, levels or targets.
///
/// `RUST_LOG` sets the minimum level, `info` by default. An invalid `RUST_LOG`
/// falls back to the default.
pub fn init_tracing_subscriber(options: TracingSubscriberOptions) {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::new("info"),
    };
    let level_filter = options.level_filter();

    let builder = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_level(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_target(false)
        .with_writer(StdioTracingWriter {
            writer_mode: options.writer_mode.unwrap_or_default(),
        });

    match level_filter {
        Some(level_filter) => builder.with_max_level(level_filter).init(),
        None => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn level_precedence() {
        let options = TracingSubscriberOptions {
            verbosity: Some(2),
            silent: Some(true),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::TRACE));

        let options = TracingSubscriberOptions {
            log_level: Some(LevelFilter::WARN),
            verbosity: Some(1),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::WARN));

        let options = TracingSubscriberOptions {
            silent: Some(true),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::OFF));
        assert_eq!(TracingSubscriberOptions::default().level_filter(), None);
    }

    #[test]
    fn writer_modes() {
        assert!(TracingWriterMode::Stdio.is_stderr(&Level::ERROR));
        assert!(TracingWriterMode::Stdio.is_stderr(&Level::WARN));
        assert!(!TracingWriterMode::Stdio.is_stderr(&Level::INFO));
        assert!(!TracingWriterMode::Stdout.is_stderr(&Level::ERROR));
        assert!(TracingWriterMode::Stderr.is_stderr(&Level::DEBUG));
    }

    #[traced_test]
    #[test]
    fn diagnostic_output() {
        println_diagnostic("Import must be at the top of the file", Some("main.tact:3:1"));
        assert!(logs_contain("Import must be at the top of the file"));
        assert!(logs_contain("--> main.tact:3:1"));
    }

    #[traced_test]
    #[test]
    fn coloured_helpers_log() {
        println_green("Parsed 3 items");
        println_yellow_err("no imports");
        println_red_err("Error: missing file");
        assert!(logs_contain("Parsed 3 items"));
        assert!(logs_contain("no imports"));
        assert!(logs_contain("Error: missing file"));
    }
}
