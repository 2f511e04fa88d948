//! Tracing macros that tag every event with proto="srpolicy" so codec and
//! transport events can be filtered together.

/// Log a debug-level message with proto="srpolicy" field
#[macro_export]
macro_rules! srpolicy_debug {
    ($($arg:tt)*) => {
        tracing::debug!(proto = "srpolicy", $($arg)*)
    };
}

/// Log an info-level message with proto="srpolicy" field
#[macro_export]
macro_rules! srpolicy_info {
    ($($arg:tt)*) => {
        tracing::info!(proto = "srpolicy", $($arg)*)
    };
}

/// Log a warning-level message with proto="srpolicy" field
#[macro_export]
macro_rules! srpolicy_warn {
    ($($arg:tt)*) => {
        tracing::warn!(proto = "srpolicy", $($arg)*)
    };
}
