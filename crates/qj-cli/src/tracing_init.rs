use std::fmt::{self as stdfmt, Write as _};
use std::path::Path;

use anyhow::Result;
use qj_config::{LogFormat, LoggingConfig};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::{LookupSpan, Registry};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

// ---------------------------------------------------------------------------
// DomainFormat: one line per event, `domain` promoted to a `[domain]` prefix
// ---------------------------------------------------------------------------

/// ```text
/// 2026-10-15T08:01:44Z DEBUG [pipe] filter predicate parsed position=0 terms=2
/// ```
///
/// qj opens no spans, so only the event itself is rendered. Events without a
/// `domain` field (e.g. from dependencies) get no prefix.
struct DomainFormat;

impl<S, N> FormatEvent<S, N> for DomainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> fmt::FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        let ansi = writer.has_ansi_escapes();
        let mut line = EventLine::default();
        event.record(&mut line);

        let mut time = String::new();
        if SystemTime.format_time(&mut fmt::format::Writer::new(&mut time)).is_err() {
            time.push_str("<unknown time>");
        }
        let level = *event.metadata().level();

        write!(writer, "{} ", paint(ansi, "2", &time))?;
        write!(writer, "{} ", paint(ansi, level_color(level), &format!("{level:>5}")))?;
        if let Some(domain) = &line.domain {
            write!(writer, "{} ", paint(ansi, "1;36", &format!("[{domain}]")))?;
        }
        write!(writer, "{}", line.message)?;
        if !line.fields.is_empty() {
            write!(writer, " {}", paint(ansi, "3", &line.fields))?;
        }
        writeln!(writer)
    }
}

fn paint(ansi: bool, code: &str, text: &str) -> String {
    if ansi {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "31",
        Level::WARN => "33",
        Level::INFO => "32",
        Level::DEBUG => "34",
        Level::TRACE => "35",
    }
}

/// Splits an event into its `domain`, its message and `key=value` pairs for
/// everything else.
#[derive(Default)]
struct EventLine {
    domain: Option<String>,
    message: String,
    fields: String,
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "domain" => self.domain = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            _ => self.record_debug(field, &value),
        }
    }

    // Numbers, booleans and `%`/`?` values all arrive here.
    fn record_debug(&mut self, field: &Field, value: &dyn stdfmt::Debug) {
        match field.name() {
            "message" => {
                write!(self.message, "{value:?}").ok();
            }
            name => {
                if !self.fields.is_empty() {
                    self.fields.push(' ');
                }
                write!(self.fields, "{name}={value:?}").ok();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// `RUST_LOG` overrides every config-driven directive.
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    let directives = config.directives();
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{directives}': {e}"))
}

fn stderr_layer(format: LogFormat, filter: EnvFilter) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Plain => fmt::layer()
            .event_format(DomainFormat)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
    }
}

fn file_layer(format: LogFormat, writer: NonBlocking, filter: EnvFilter) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        LogFormat::Plain => fmt::layer()
            .event_format(DomainFormat)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Initialise the `tracing` subscriber stack from [`LoggingConfig`].
///
/// Logs always go to stderr so stdout carries only query output. Returns an
/// optional [`WorkerGuard`] that **must** be held until the process exits;
/// dropping it flushes and closes the non-blocking file writer.
pub fn init_tracing(config: &LoggingConfig, base_dir: &Path) -> Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer(config.format, build_filter(config)?)];
    let mut guard: Option<WorkerGuard> = None;

    if let Some(ref file_path) = config.file {
        let resolved = if file_path.is_relative() {
            base_dir.join(file_path)
        } else {
            file_path.clone()
        };
        let dir = resolved
            .parent()
            .ok_or_else(|| anyhow::anyhow!("log file path has no parent directory"))?;
        std::fs::create_dir_all(dir)?;
        let file_name = resolved
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("log file path has no file name"))?
            .to_os_string();

        let file_appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);
        layers.push(file_layer(config.format, non_blocking, build_filter(config)?));
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing already initialised: {e}"))?;

    Ok(guard)
}
