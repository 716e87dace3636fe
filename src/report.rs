use std::cell::RefCell;
use std::collections::VecDeque;

/// Default number of messages a [`MessageLog`] keeps.
pub const DEFAULT_CAPACITY: usize = 6;

/// Severity of a reported message. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A sink for human-readable status messages.
///
/// The kernel itself never reports through a `Reporter`; applications
/// driving it inject the sink of their choice.
pub trait Reporter {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Forwards messages as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!("{message}"),
            Level::Warning => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
    }
}

/// A single logged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
}

/// Keeps the most recent messages, evicting the oldest past capacity.
#[derive(Debug)]
pub struct MessageLog {
    capacity: usize,
    entries: RefCell<VecDeque<LogEntry>>,
}

impl MessageLog {
    /// Creates a log holding at most `capacity` messages (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: RefCell::new(VecDeque::with_capacity(capacity)),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Snapshot of the retained messages, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().iter().cloned().collect()
    }

    /// Display opacity per retained message, oldest first.
    ///
    /// The newest message is fully opaque; each older one fades by
    /// `(1 - min_opacity) / capacity`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn opacities(&self, min_opacity: f64) -> Vec<f64> {
        let len = self.len();
        let step = (1.0 - min_opacity) / self.capacity as f64;
        (0..len)
            .map(|i| 1.0 - step * (len - 1 - i) as f64)
            .collect()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Reporter for MessageLog {
    fn log(&self, level: Level, message: &str) {
        let mut entries = self.entries.borrow_mut();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(LogEntry {
            level,
            message: message.to_owned(),
        });
    }
}
