//! Capturing logger for assertions on log output
//!
//! Records are kept per thread, so tests running in parallel do not see each
//! other's output. Async tests must log from the test thread, which holds for
//! `#[actix_web::test]`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

/// One captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    pub level: Level,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<CapturedLog>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records.borrow_mut().push(CapturedLog {
                level: record.level(),
                message: record.args().to_string(),
            });
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Install the capturing logger (once per process) and clear this thread's records
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Records captured on this thread since the last [`capture_logs`]
#[must_use]
pub fn captured_logs() -> Vec<CapturedLog> {
    RECORDS.with(|records| records.borrow().clone())
}

/// Captured records at `level` whose message contains `needle`
#[must_use]
pub fn logs_containing(level: Level, needle: &str) -> Vec<CapturedLog> {
    captured_logs()
        .into_iter()
        .filter(|log| log.level == level && log.message.contains(needle))
        .collect()
}
