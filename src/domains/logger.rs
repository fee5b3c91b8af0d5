use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Domain-level logging port. Infallible from the domain's point of view.
pub trait DomainLogger: Send + Sync + 'static {
    fn log(&self, level: LogLevel, msg: &str);

    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// Writes through the `log` facade into a `fast_log` file appender.
pub struct FileLogger;

impl FileLogger {
    /// Install `fast_log` as the global `log` backend writing to `path`.
    pub fn init(path: &str, level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(fast_log::config::Config::new().file(path).level(level))?;
        Ok(())
    }
}

impl DomainLogger for FileLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        let stamp = Utc::now().to_rfc3339();
        match level {
            LogLevel::Debug => log::debug!("{} - {}", stamp, msg),
            LogLevel::Info => log::info!("{} - {}", stamp, msg),
            LogLevel::Warn => log::warn!("{} - {}", stamp, msg),
            LogLevel::Error => log::error!("{} - {}", stamp, msg),
        }
    }
}
