use log::Level;
use std::sync::Mutex;

/// Sink for operator-facing progress and warning lines.
///
/// The walker and extractors report through this trait instead of writing to a
/// process-wide stream, so runs can be observed (or captured in tests) without
/// touching stdout.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);
}

/// Forwards every report to the `log` facade
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: Level, message: &str) {
        ::log::log!(level, "{}", message);
    }
}

/// Collects reports in memory for later inspection
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far, in order
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages reported at warning level
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}
