//! Logger that stays out of the way of a live progress bar
//!
//! Records go through `env_logger`, but while a [`ProgressReporter`] is
//! active each record is written inside [`ProgressBar::suspend`], so the bar
//! is cleared and redrawn around the log line instead of being torn.
//!
//! [`ProgressReporter`]: super::ProgressReporter

use indicatif::ProgressBar;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::{Arc, Mutex};

/// Shared handle to the progress bar currently on screen, if any
#[derive(Clone, Default)]
pub struct BarSlot {
    bar: Arc<Mutex<Option<ProgressBar>>>,
}

impl BarSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&self, bar: Option<ProgressBar>) {
        if let Ok(mut slot) = self.bar.lock() {
            *slot = bar;
        }
    }

    /// Bar currently registered, if any
    pub fn current(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|slot| slot.clone())
    }
}

/// `env_logger` wrapper that suspends the active progress bar per record
pub struct SuspendingLogger {
    inner: env_logger::Logger,
    slot: BarSlot,
}

impl SuspendingLogger {
    /// Wrap a built `env_logger` logger
    pub fn new(inner: env_logger::Logger, slot: BarSlot) -> Self {
        SuspendingLogger { inner, slot }
    }

    /// Most verbose level the wrapped logger will emit
    pub fn filter(&self) -> LevelFilter {
        self.inner.filter()
    }
}

impl Log for SuspendingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.inner.matches(record) {
            return;
        }
        match self.slot.current() {
            Some(bar) => bar.suspend(|| self.inner.log(record)),
            None => self.inner.log(record),
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Install the global logger.
///
/// `level` is the default filter; `RUST_LOG` still overrides it.
pub fn init(level: LevelFilter, slot: BarSlot) -> Result<(), SetLoggerError> {
    let inner = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .build();
    let logger = SuspendingLogger::new(inner, slot);
    let max_level = logger.filter();

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
