use std::{
    fmt,
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
        writer::BoxMakeWriter,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::LogSettings;

const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Terminal stream that receives console log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    /// Headless runs print their labels on stdout, so their logs go to stderr.
    pub fn for_run(headless: bool) -> Self {
        if headless { Self::Stderr } else { Self::Stdout }
    }

    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }

    fn make_writer(self) -> BoxMakeWriter {
        match self {
            Self::Stdout => BoxMakeWriter::new(io::stdout),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// Event formatter: local timestamp, coloured level, `file:line`, then fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z");
        styled(&mut writer, DIM, timestamp)?;
        styled(
            &mut writer,
            level_colour(meta.level()),
            format_args!("{:>5}", meta.level()),
        )?;
        if let Some(location) = source_location(meta) {
            styled(&mut writer, CYAN, location)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Writes `text` and a trailing space, wrapped in `style` when ANSI is on.
fn styled(
    writer: &mut Writer<'_>,
    style: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{style}{text}{RESET} ")
    } else {
        write!(writer, "{text} ")
    }
}

fn level_colour(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// `file:line` of the call site, relative to the crate's `src/`.
fn source_location(meta: &Metadata<'_>) -> Option<String> {
    let file = meta.file()?;
    let line = meta.line()?;
    let file = file
        .strip_prefix("src/")
        .or_else(|| file.strip_prefix("src\\"))
        .unwrap_or(file);
    Some(format!("{file}:{line}"))
}

/// Builds the global filter. `RUST_LOG` wins over the configured level.
///
/// Accepts a bare level ("error", "warn", "info", "debug", "trace") or any
/// full `EnvFilter` directive.
pub fn make_filter(configured: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
        .with_context(|| format!("invalid log level '{configured}'"))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Initializes logging. Call once at startup.
///
/// - Console: written to `console`; coloured when that stream is a
///   terminal, plain when piped; silenced entirely when `settings.stdout`
///   is false.
/// - File: appended to when `settings.file` is set. The directory must
///   already exist.
/// - Level: `RUST_LOG` when set, otherwise `settings.level`.
pub fn init_logging(
    settings: &LogSettings,
    console: ConsoleTarget,
) -> Result<()> {
    let filter = make_filter(&settings.level)?;

    let console_gate = if settings.stdout {
        LevelFilter::TRACE
    } else {
        LevelFilter::OFF
    };
    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(console.is_terminal())
        .with_writer(console.make_writer())
        .with_filter(console_gate);

    let file_layer = settings
        .file
        .as_deref()
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_filter_accepts_bare_levels_and_directives() {
        assert!(make_filter("debug").is_ok());
        assert!(make_filter("info,tip_core=trace").is_ok());
    }

    #[test]
    fn headless_runs_log_to_stderr() {
        assert_eq!(ConsoleTarget::for_run(true), ConsoleTarget::Stderr);
        assert_eq!(ConsoleTarget::for_run(false), ConsoleTarget::Stdout);
    }

    #[test]
    fn level_colours_differ_per_level() {
        assert_ne!(level_colour(&Level::ERROR), level_colour(&Level::WARN));
        assert_ne!(level_colour(&Level::INFO), level_colour(&Level::DEBUG));
    }

    #[test]
    fn open_log_file_reports_missing_directory() {
        let err = open_log_file(Path::new("/nonexistent-dir/tip-time.log")).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }
}
