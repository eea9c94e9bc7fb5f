//! # Error Types
//!
//! Error taxonomy for the logging pipeline. There are only two failure
//! classes: a level name that was never registered, and an I/O failure
//! while preparing or appending to the log file. Everything else either
//! succeeds or is a deliberate no-op (channel filtering).

use thiserror::Error;

/// Errors produced by [`Logger`](crate::Logger) operations.
///
/// Both variants are fatal to the call that raised them and propagate
/// synchronously to the caller. No operation retries internally.
#[derive(Debug, Error)]
pub enum LogError {
    /// `log` was called with a level name that is not in the registry.
    ///
    /// There is no default color fallback: emitting with an unregistered
    /// level is a caller bug, not something to paper over. The payload is
    /// the uppercased key that failed the lookup.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// Directory creation or file append failed.
    ///
    /// Raised during construction when `use_file` is requested but the log
    /// directory cannot be prepared, and during `log` when the append to
    /// the log file fails. The console write has already completed by the
    /// time an append error surfaces.
    #[error("log file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
