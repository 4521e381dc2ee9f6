//! No-op logger implementation

use super::traits::Logger;

/// A logger that drops every message
///
/// The default for config providers and the resolver when the host
/// does not pass one in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LoggerExt;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();
        logger.info("selected provider");
        logger.warn_fmt(format_args!("ignoring blank {}", "TEMPMAIL_PROVIDER"));
    }
}
