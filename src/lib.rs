//! # Chanlog
//!
//! A small configurable logging facility: leveled, timestamped, optionally
//! channel-tagged log lines written to a colored console and/or appended to
//! a file.
//!
//! ## Feature Overview
//!
//! - **Flat named levels** with independent colors (`LOG`, `WRN`, `ERR`
//!   built in; register more at runtime); no severity hierarchy.
//! - **Channel filtering**: tag messages with an integer channel and
//!   observe one channel at a time; channel `0` is a wildcard in both
//!   directions.
//! - **Two palettes** per level (16-color name and xterm-256 code), chosen
//!   by one switch.
//! - **Packed flag configuration**: the five boolean switches round-trip
//!   through a single `u8` bit pattern.
//! - **Optional file sink**: every rendered line is appended to a
//!   timestamp-named file, opened and closed per write.
//!
//! ## Architecture Overview
//!
//! The library is organized into small focused modules:
//!
//! - `config`: the discrete-options config struct and the flag bit codec
//! - `levels`: the level → color registry
//! - `console`: the console render capability and its ANSI implementation
//! - `file_sink`: directory preparation and per-line file appends
//! - `logger`: the formatting/filtering/dispatch pipeline
//! - `error`: the two-variant error taxonomy
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chanlog::{ColorPair, Logger, LoggerConfig, LogOptions};
//!
//! fn main() -> Result<(), chanlog::LogError> {
//!     let mut logger = Logger::new(LoggerConfig {
//!         use_whitespace: true,
//!         use_channels: true,
//!         ..Default::default()
//!     })?;
//!
//!     logger.log("boot ok", LogOptions::default())?;
//!     logger.warn("cache cold", LogOptions { channel: 2, ..Default::default() })?;
//!
//!     logger.add_level("DEBUG", ColorPair::new("cyan", 14));
//!     logger.log("trace point", LogOptions { level: "debug".into(), ..Default::default() })?;
//!
//!     // Only channel 2 (and global) messages from here on.
//!     logger.observe_channel(2);
//!     logger.log("hidden", LogOptions { channel: 9, ..Default::default() })?;
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! Strictly single-threaded and synchronous: every operation completes
//! before returning, and the design provides no internal locking. Callers
//! sharing one `Logger` across threads must synchronize externally.

/// Logger configuration and the packed-flag bit codec
///
/// Contains `LoggerConfig` (discrete options with struct-update defaults)
/// and `FeatureFlags` (the five switches packed into a `u8`), plus the
/// named bit masks. The two representations are exact inverses over the
/// 5-bit flag space.
pub mod config;

/// Console render capability
///
/// The `ConsoleSink` trait, the default `AnsiConsole` implementation on top
/// of the `colored` crate, and a `MemorySink` capture implementation for
/// tests and embedding.
pub mod console;

/// Error taxonomy
///
/// `LogError` with its two variants: unknown level and file I/O failure.
pub mod error;

/// File sink capability
///
/// Directory preparation at construction time and scoped per-line appends.
pub mod file_sink;

/// Level registry
///
/// `ColorPair` and the case-insensitive `LevelRegistry`, pre-seeded with
/// the three built-in levels.
pub mod levels;

/// The logging pipeline
///
/// `Logger` itself, the per-call `LogOptions`, and the pure `should_emit`
/// channel predicate.
pub mod logger;

// Re-export the primary types so typical users never name the modules.

pub use config::{FeatureFlags, LoggerConfig};
pub use console::{AnsiConsole, ConsoleSink, MemorySink, RenderColor, TextAttr};
pub use error::LogError;
pub use levels::ColorPair;
pub use logger::{should_emit, LogOptions, Logger};

/// The current version of the chanlog crate
///
/// Automatically populated from Cargo.toml; the demo binary reports it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
///
/// Named constants for everything `LoggerConfig::default` and
/// `LogOptions::default` fall back to.
pub mod defaults {
    /// The wildcard channel: observing it shows everything, and messages
    /// sent on it are always visible.
    pub const GLOBAL_CHANNEL: u32 = 0;

    /// Channel messages are sent on when the caller does not pick one.
    pub const DEFAULT_CHANNEL: u32 = GLOBAL_CHANNEL;

    /// Level used when the caller does not pick one.
    pub const LEVEL: &str = "LOG";

    /// strftime format for message timestamps: second precision, no
    /// fractional seconds, no timezone suffix, exactly 19 characters.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Directory the log file is created in when `use_file` is set.
    pub const FILE_DIR: &str = "./logs/";

    /// Extension appended to the computed log file name.
    pub const FILE_EXT: &str = ".log";

    /// strftime template for the log file name, formatted with the local
    /// time once at construction.
    pub const FILE_NAME_TEMPLATE: &str = "%Y-%m-%d %H-%M-%S";
}
