//! Tracing and logging (shared setup).

pub mod subscriber;

pub use subscriber::{LogFormat, LOG_FORMAT_ENV};

/// Initialize process-wide logging, picking the output format from
/// `SPICERACK_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
