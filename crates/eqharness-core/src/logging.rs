//! Log output setup
//!
//! Events are rendered as `<YYYY-MM-DD HH:MM:SS> - <LEVEL> - <message>` on
//! stdout.

use std::fmt;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Event formatter producing `timestamp - LEVEL - message` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct HarnessFormatter;

impl<S, N> FormatEvent<S, N> for HarnessFormatter
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
        write!(
            writer,
            "{} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` is honoured when set; otherwise the level is `info`, or
/// `debug` with `verbose`. Calling this twice keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(HarnessFormatter)
        .with_writer(std::io::stdout)
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialized");
    }
}
