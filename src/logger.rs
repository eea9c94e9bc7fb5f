//! # Logger Core
//!
//! The formatting and dispatch pipeline. A [`Logger`] holds its resolved
//! feature switches, a per-instance level registry, the observed channel,
//! and (optionally) the resolved log file path. Every `log` call runs the
//! same sequence:
//!
//! 1. **Channel filter**: reject silently when the observer would not see
//!    the message; this is normal control flow, not an error.
//! 2. **Prefix resolution**: a non-empty `prefixes` list overrides the
//!    single `prefix` with its `", "` join.
//! 3. **Timestamp resolution**: default to the current UTC time at second
//!    precision.
//! 4. **Body assembly**: prepend segments right-to-left, each with the
//!    configured separator token.
//! 5. **Level resolution**: case-insensitive registry lookup; unknown
//!    levels are fatal to the call.
//! 6. **Dispatch**: console render first, then the optional file append.
//!
//! The whole pipeline is synchronous and deterministic: fixed inputs
//! produce a byte-identical line every time.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::config::{FeatureFlags, LoggerConfig};
use crate::console::{AnsiConsole, ConsoleSink, RenderColor, TextAttr};
use crate::defaults;
use crate::error::LogError;
use crate::file_sink;
use crate::levels::{ColorPair, LevelRegistry};

/// Channel-visibility predicate.
///
/// Channel `0` is a wildcard in both directions: an observer on the global
/// channel sees everything, and a message sent on the global channel is
/// visible to every observer. Otherwise the channels must match exactly.
pub fn should_emit(current_channel: u32, message_channel: u32) -> bool {
    current_channel == defaults::GLOBAL_CHANNEL
        || message_channel == defaults::GLOBAL_CHANNEL
        || message_channel == current_channel
}

/// Per-call options for [`Logger::log`].
///
/// Defaults cover the common case, so call sites name only what they
/// change:
///
/// ```rust
/// use chanlog::{Logger, LoggerConfig, LogOptions};
///
/// # fn main() -> Result<(), chanlog::LogError> {
/// let logger = Logger::new(LoggerConfig::default())?;
/// logger.log("payload received", LogOptions { channel: 3, ..Default::default() })?;
/// # Ok(())
/// # }
/// ```
///
/// `attrs` and `prefixes` are owned per-call values; nothing is shared
/// between calls.
#[derive(Clone, Debug)]
pub struct LogOptions {
    /// Level name, resolved case-insensitively. Defaults to `"LOG"`.
    pub level: String,
    /// Explicit timestamp; `None` means the current UTC time.
    pub timestamp: Option<DateTime<Utc>>,
    /// Text attributes forwarded to the console sink.
    pub attrs: Vec<TextAttr>,
    /// Single prefix rendered as `[prefix]`.
    pub prefix: String,
    /// Multiple prefixes; when non-empty, their `", "` join replaces
    /// `prefix` entirely.
    pub prefixes: Vec<String>,
    /// Channel the message is sent on. Defaults to the global channel.
    pub channel: u32,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: defaults::LEVEL.to_string(),
            timestamp: None,
            attrs: Vec::new(),
            prefix: String::new(),
            prefixes: Vec::new(),
            channel: defaults::GLOBAL_CHANNEL,
        }
    }
}

/// A configured logging instance.
///
/// Multiple loggers coexist independently: each owns its switches, level
/// registry, observed channel, and file path. There is no process-wide
/// shared state, and no internal synchronization; a logger shared across
/// threads needs external locking.
pub struct Logger {
    switches: FeatureFlags,
    bits: u8,
    levels: LevelRegistry,
    current_channel: u32,
    log_file: Option<PathBuf>,
    console: Box<dyn ConsoleSink>,
}

impl Logger {
    /// Construct a logger that renders to stdout via [`AnsiConsole`].
    ///
    /// ## Errors
    ///
    /// [`LogError::Io`] when `use_file` resolves true but the log directory
    /// cannot be prepared. A file sink that cannot be set up fails
    /// construction outright rather than degrading to console-only.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        Self::with_console(config, Box::new(AnsiConsole::new()))
    }

    /// Construct a logger with an injected console sink.
    ///
    /// The sink is a collaborator, not configuration: it survives
    /// [`set_flags`](Self::set_flags) resets.
    pub fn with_console(
        config: LoggerConfig,
        console: Box<dyn ConsoleSink>,
    ) -> Result<Self, LogError> {
        let (switches, bits, log_file) = Self::resolve_state(&config)?;
        Ok(Self {
            switches,
            bits,
            levels: LevelRegistry::default(),
            current_channel: defaults::GLOBAL_CHANNEL,
            log_file,
            console,
        })
    }

    /// Resolve a config to switches, canonical bits, and the prepared log
    /// file path. Shared by construction and `set_flags`.
    fn resolve_state(
        config: &LoggerConfig,
    ) -> Result<(FeatureFlags, u8, Option<PathBuf>), LogError> {
        let (switches, bits) = config.resolve();
        if switches.verbose {
            eprintln!(
                "logger setup flags: use_256={} use_channels={} use_whitespace={} use_file={}",
                switches.use_256, switches.use_channels, switches.use_whitespace, switches.use_file
            );
        }
        let log_file = if switches.use_file {
            if switches.verbose && !config.file_dir.is_dir() {
                eprintln!("log dir {} missing, creating it", config.file_dir.display());
            }
            Some(file_sink::prepare_log_path(
                &config.file_dir,
                &config.file_name_template,
                &config.file_ext,
            )?)
        } else {
            None
        };
        Ok((switches, bits, log_file))
    }

    /// Emit one message through the full pipeline.
    ///
    /// A message filtered out by the channel predicate returns `Ok(())`
    /// with no side effects. Not rendering it is the point, not a failure.
    ///
    /// ## Errors
    ///
    /// - [`LogError::UnknownLevel`] when `opts.level` was never registered.
    /// - [`LogError::Io`] when the file append fails. The console render
    ///   has already happened by then.
    pub fn log(&self, message: &str, opts: LogOptions) -> Result<(), LogError> {
        if !should_emit(self.current_channel, opts.channel) {
            return Ok(());
        }

        let prefix = if opts.prefixes.is_empty() {
            opts.prefix
        } else {
            // An explicit `prefix` loses to a non-empty `prefixes` list.
            opts.prefixes.join(", ")
        };

        let timestamp = opts
            .timestamp
            .unwrap_or_else(Utc::now)
            .format(defaults::TIMESTAMP_FORMAT)
            .to_string();

        let level = opts.level.to_uppercase();
        let pair = self.levels.resolve(&level)?;
        let color = if self.switches.use_256 {
            RenderColor::Ansi256(pair.code256)
        } else {
            RenderColor::Named(pair.name16.clone())
        };

        let line = self.compose_line(&level, &timestamp, message, &prefix, opts.channel);

        if self.switches.verbose {
            eprintln!(
                "logger render args: attrs={:?} prefix={:?} channel={} color={}",
                opts.attrs, prefix, opts.channel, color
            );
        }

        // Console first; a file failure must not take the console line with it.
        self.console.render(&line, &color, &opts.attrs);
        if let Some(path) = &self.log_file {
            file_sink::append_line(path, &line)?;
        }
        Ok(())
    }

    /// Shorthand for [`log`](Self::log) at level `ERR`.
    ///
    /// Forwards every other option unchanged; `opts.level` is overridden.
    pub fn err(&self, message: &str, opts: LogOptions) -> Result<(), LogError> {
        self.log(
            message,
            LogOptions {
                level: "ERR".to_string(),
                ..opts
            },
        )
    }

    /// Shorthand for [`log`](Self::log) at level `WRN`.
    ///
    /// Forwards every other option unchanged; `opts.level` is overridden.
    pub fn warn(&self, message: &str, opts: LogOptions) -> Result<(), LogError> {
        self.log(
            message,
            LogOptions {
                level: "WRN".to_string(),
                ..opts
            },
        )
    }

    /// Assemble the final line from its resolved pieces.
    ///
    /// Segments are prepended right-to-left, each preceded by the separator
    /// token (a single space when `use_whitespace`, empty otherwise):
    /// timestamp and message always, then the prefix segment when present,
    /// then the channel segment when `use_channels`, then the level tag.
    fn compose_line(
        &self,
        level: &str,
        timestamp: &str,
        message: &str,
        prefix: &str,
        channel: u32,
    ) -> String {
        let sep = if self.switches.use_whitespace { " " } else { "" };
        let mut body = format!("{}{}: {}", sep, timestamp, message);
        if !prefix.is_empty() {
            body = format!("{}[{}]{}", sep, prefix, body);
        }
        if self.switches.use_channels {
            body = format!("{}[{}]{}", sep, channel, body);
        }
        format!("[{}]{}", level, body)
    }

    /// Replace the configuration from a packed flag integer.
    ///
    /// This is a full reset, not a patch: the logger is rebuilt as if
    /// constructed fresh with `LoggerConfig { flags: new_flags, ..Default }`.
    /// Custom level registrations, the observed channel, and any custom
    /// file-sink settings are discarded; the console sink is kept. Returns
    /// the new flag integer.
    ///
    /// ## Errors
    ///
    /// [`LogError::Io`] when the new flags request a file sink and the
    /// default log directory cannot be prepared. The logger is left
    /// unchanged in that case.
    pub fn set_flags(&mut self, new_flags: u8) -> Result<u8, LogError> {
        if self.switches.verbose {
            eprintln!("logger old flags: {}", self.bits);
            eprintln!("logger new flags: {}", new_flags);
        }
        let config = LoggerConfig {
            flags: new_flags,
            ..Default::default()
        };
        let (switches, bits, log_file) = Self::resolve_state(&config)?;
        self.switches = switches;
        self.bits = bits;
        self.log_file = log_file;
        self.levels = LevelRegistry::default();
        self.current_channel = defaults::GLOBAL_CHANNEL;
        Ok(new_flags)
    }

    /// Switch the observed channel for all subsequent `log` calls.
    ///
    /// Has no effect on messages already dispatched. Observing the global
    /// channel (`0`) shows everything.
    pub fn observe_channel(&mut self, new_channel: u32) {
        if self.switches.verbose {
            eprintln!("logger channel change: {}", new_channel);
        }
        self.current_channel = new_channel;
    }

    /// Register or overwrite a level color, returning the stored pair.
    ///
    /// The pair's contents are not validated; a bad color name surfaces
    /// from the render capability when the level is first used.
    pub fn add_level(&mut self, key: &str, pair: ColorPair) -> ColorPair {
        self.levels.add(key, pair)
    }

    /// The canonical packed flag integer for the current configuration.
    pub fn flags(&self) -> u8 {
        self.bits
    }

    /// The channel currently being observed.
    pub fn current_channel(&self) -> u32 {
        self.current_channel
    }

    /// The resolved log file path, when `use_file` is active.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
