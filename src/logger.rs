use log::{Level, LevelFilter, Metadata, Record};
use std::sync::OnceLock;
use std::time::Instant;

const LOG_LEVEL_VAR: &str = "GLSLEMBED_LOG";

struct Logger {
    time_start: Instant,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_PKG_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let time = self.time_start.elapsed().as_secs_f64();
            let level = match record.level() {
                Level::Error => "\x1B[1;31mERRO\x1B[0m",
                Level::Warn => "\x1B[1;33mWARN\x1B[0m",
                Level::Info => "\x1B[1;32mINFO\x1B[0m",
                Level::Debug => "\x1B[1;36mDEBG\x1B[0m",
                Level::Trace => "\x1B[1;34mTRCE\x1B[0m",
            };
            eprintln!("[{time:>10.6}] {level} {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the stderr logger. The level defaults to `info` and can be
/// overridden with `GLSLEMBED_LOG` (`off`, `error`, ..., `trace`).
pub fn initialize_logger() {
    let time_start = Instant::now();
    let logger = LOGGER.get_or_init(|| Logger { time_start });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(max_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref()));
    }
}

fn max_level(var: Option<&str>) -> LevelFilter {
    var.and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[test]
fn level_from_environment() {
    assert_eq!(max_level(None), LevelFilter::Info);
    assert_eq!(max_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(max_level(Some("OFF")), LevelFilter::Off);
    assert_eq!(max_level(Some("loud")), LevelFilter::Info);
}
