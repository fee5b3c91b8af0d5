use crate::domains::logger::{DomainLogger, LogLevel};
use std::sync::Arc;

/// Forwards domain messages to `tracing` under the `kinematic_chain::domain` target.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn log(&self, level: LogLevel, msg: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "kinematic_chain::domain", "{}", msg),
            LogLevel::Info => tracing::info!(target: "kinematic_chain::domain", "{}", msg),
            LogLevel::Warn => tracing::warn!(target: "kinematic_chain::domain", "{}", msg),
            LogLevel::Error => tracing::error!(target: "kinematic_chain::domain", "{}", msg),
        }
    }
}

pub fn init_tracing_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge)
}
