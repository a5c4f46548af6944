//! Logging utilities for the generator crates.
//!
//! Events are emitted through `tracing`; the binary decides which subscriber
//! (if any) receives them. Library crates never install a subscriber.

#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)*) => {
        tracing::event!(tracing::Level::ERROR, module = $module, $($arg)*);
    }
}

#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)*) => {
        tracing::event!(tracing::Level::WARN, module = $module, $($arg)*);
    }
}

#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)*) => {
        tracing::event!(tracing::Level::INFO, module = $module, $($arg)*);
    }
}

#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)*) => {
        tracing::event!(tracing::Level::DEBUG, module = $module, $($arg)*);
    }
}

#[macro_export]
macro_rules! log_trace {
    ($module:expr, $($arg:tt)*) => {
        tracing::event!(tracing::Level::TRACE, module = $module, $($arg)*);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_arguments() {
        log_error!("test", "failed on {}", "PLUS");
        log_warn!("test", "suspicious entry {}", 3);
        log_info!("test", "wrote {} bytes", 42);
        log_debug!("test", "selected {} overloads", 3);
        log_trace!("test", "rendered unit");
    }
}
