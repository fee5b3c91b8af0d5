use crate::domains::logger::{DomainLogger, LogLevel};
use std::sync::Arc;

/// Fans every message out to each wrapped logger in order.
pub struct MultiLogger {
    sinks: Vec<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<Arc<dyn DomainLogger>>) -> Self {
        Self { sinks }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl DomainLogger for MultiLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        for sink in &self.sinks {
            sink.log(level, msg);
        }
    }
}

/// Tracing output, plus a file sink when `file` is given and can be opened.
/// A failing file sink is reported through tracing and skipped.
pub fn init_combined_logger(file: Option<&str>, level: log::LevelFilter) -> Arc<dyn DomainLogger> {
    let mut sinks = vec![super::init_tracing_logger()];
    if let Some(path) = file {
        match super::init_file_logger(path, level) {
            Ok(file_logger) => sinks.push(file_logger),
            Err(e) => tracing::warn!("{}", e),
        }
    }
    Arc::new(MultiLogger::new(sinks))
}
