//! The global destination of statistics. Every statistic is written as a `{PREFIX} {name}={value}`
//! line; a block of statistics can be closed by a fixed line.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Where statistics are written to and how their lines are formatted.
pub struct StatisticSink {
    prefix: &'static str,
    block_end: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl StatisticSink {
    fn line(&self, name: impl Display, value: impl Display) -> String {
        let name = name.to_string();
        let name = match self.casing {
            Some(casing) => name.to_case(casing),
            None => name,
        };
        format!("{} {name}={value}", self.prefix)
    }
}

impl Debug for StatisticSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticSink")
            .field("prefix", &self.prefix)
            .field("block_end", &self.block_end)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_SINK: OnceLock<Mutex<StatisticSink>> = OnceLock::new();

/// Enables statistic logging.
///
/// Every statistic line starts with `prefix` and has its name converted to `casing` if one is
/// given; `block_end` is written by [`log_statistic_postfix`]. Statistics go to `writer`, or to
/// stdout if it is [`None`]. Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    block_end: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_SINK.get_or_init(|| {
        Mutex::new(StatisticSink {
            prefix,
            block_end,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(std::io::stdout())),
        })
    });
}

fn with_sink(write: impl FnOnce(&mut StatisticSink)) {
    if let Some(Ok(mut sink)) = STATISTIC_SINK.get().map(Mutex::lock) {
        write(&mut sink);
    }
}

/// Writes the statistic `name` with `value`; does nothing unless statistic logging is enabled.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_sink(|sink| {
        let line = sink.line(name, value);
        let _ = writeln!(sink.writer, "{line}");
    });
}

/// Closes a block of statistics with the configured end line, if there is one.
pub fn log_statistic_postfix() {
    with_sink(|sink| {
        if let Some(block_end) = sink.block_end {
            let _ = writeln!(sink.writer, "{block_end}");
        }
    });
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_SINK.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink(casing: Option<Case>) -> StatisticSink {
        StatisticSink {
            prefix: "%%%wattle-stat:",
            block_end: None,
            casing,
            writer: Box::new(std::io::sink()),
        }
    }

    #[test]
    fn line_holds_the_prefix_name_and_value() {
        assert_eq!(
            sink(None).line("num_backtracks", 12),
            "%%%wattle-stat: num_backtracks=12"
        );
    }

    #[test]
    fn name_is_converted_to_the_configured_casing() {
        assert_eq!(
            sink(Some(Case::Camel)).line("num_solutions", 18),
            "%%%wattle-stat: numSolutions=18"
        );
    }
}
