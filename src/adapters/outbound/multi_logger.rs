use crate::domains::logger::{DomainLogger, LogLevel};
use std::sync::Arc;

/// Forwards every message to a primary and an optional secondary logger.
pub struct MultiLogger {
    primary: Arc<dyn DomainLogger>,
    secondary: Option<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(primary: Arc<dyn DomainLogger>, secondary: Option<Arc<dyn DomainLogger>>) -> Self {
        Self { primary, secondary }
    }
}

impl DomainLogger for MultiLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        self.primary.log(level, msg);
        if let Some(sec) = &self.secondary {
            sec.log(level, msg);
        }
    }
}

/// Initialize a combined logger: try the file logger and attach console as secondary.
/// Falls back to the console alone when the file logger cannot start.
pub fn init_combined_logger(path: &str, level: LogLevel) -> Arc<dyn DomainLogger> {
    let console = super::init_console_logger(level);
    match super::init_file_logger(path, level) {
        Ok(file_logger) => {
            Arc::new(MultiLogger::new(file_logger, Some(console))) as Arc<dyn DomainLogger>
        }
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}
