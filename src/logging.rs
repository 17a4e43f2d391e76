//! Diagnostic logging, filtered by `RUST_LOG` (errors only when unset).
//!
//! The echoed command line is user output and does not go through here.

/// Install the global logger. Records go to stderr.
///
/// The returned guard must stay alive for as long as logging is wanted.
/// `None` means a logger could not be installed and records are discarded.
#[must_use]
pub fn init() -> Option<slog_scope::GlobalLoggerGuard> {
    slog_envlogger::init().ok()
}
