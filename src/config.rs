//! # Logger Configuration and Flag Codec
//!
//! This module provides the two equivalent representations of logger
//! configuration:
//!
//! - **Discrete options** (`LoggerConfig`): named boolean switches plus the
//!   file-sink settings, suitable for struct-update construction.
//! - **Packed flags** (`FeatureFlags` / a `u8` bit pattern): a compact
//!   integer encoding of the five boolean switches, suitable for terse
//!   call sites and runtime reconfiguration.
//!
//! The two representations are kept interchangeable by an explicit codec
//! pair (`FeatureFlags::to_bits` / `FeatureFlags::from_bits`) rather than
//! inline bit tests, so the round-trip property is independently testable.
//!
//! ## Bit Layout
//!
//! | Bit | Switch          |
//! |-----|-----------------|
//! | 0   | `use_256`       |
//! | 1   | `use_channels`  |
//! | 2   | `use_whitespace`|
//! | 3   | `verbose`       |
//! | 4   | `use_file`      |
//!
//! ## Precedence
//!
//! A nonzero `flags` field is authoritative: the discrete booleans are
//! ignored and rebuilt from the bits. A zero `flags` field means the
//! discrete booleans win and the canonical bits are recomputed from them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::defaults;

/// Bit mask for the 256-color palette switch.
pub const FLAG_USE_256: u8 = 1 << 0;
/// Bit mask for the channel-tag switch.
pub const FLAG_USE_CHANNELS: u8 = 1 << 1;
/// Bit mask for the whitespace-separator switch.
pub const FLAG_USE_WHITESPACE: u8 = 1 << 2;
/// Bit mask for the verbose-diagnostics switch.
pub const FLAG_VERBOSE: u8 = 1 << 3;
/// Bit mask for the file-sink switch.
pub const FLAG_USE_FILE: u8 = 1 << 4;

/// The five boolean feature switches of a logger, unpacked.
///
/// This is the decoded form of the packed `u8` flag integer. The codec
/// methods are exact inverses over the 5-bit space `0..=31`; bits above
/// bit 4 are ignored on decode and never produced on encode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Render with the 256-color palette instead of the 16-color names.
    pub use_256: bool,
    /// Embed `[<channel>]` tags in formatted output.
    pub use_channels: bool,
    /// Prepend a single-space separator before each appended segment.
    pub use_whitespace: bool,
    /// Print internal diagnostics on mutating operations.
    pub verbose: bool,
    /// Append every formatted line to the log file as well.
    pub use_file: bool,
}

impl FeatureFlags {
    /// Pack the five switches into the canonical flag integer.
    pub fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.use_256 {
            bits |= FLAG_USE_256;
        }
        if self.use_channels {
            bits |= FLAG_USE_CHANNELS;
        }
        if self.use_whitespace {
            bits |= FLAG_USE_WHITESPACE;
        }
        if self.verbose {
            bits |= FLAG_VERBOSE;
        }
        if self.use_file {
            bits |= FLAG_USE_FILE;
        }
        bits
    }

    /// Unpack a flag integer into the five switches.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            use_256: bits & FLAG_USE_256 != 0,
            use_channels: bits & FLAG_USE_CHANNELS != 0,
            use_whitespace: bits & FLAG_USE_WHITESPACE != 0,
            verbose: bits & FLAG_VERBOSE != 0,
            use_file: bits & FLAG_USE_FILE != 0,
        }
    }
}

/// Construction-time configuration for a [`Logger`](crate::Logger).
///
/// All fields have usable defaults, so call sites typically name only what
/// they change:
///
/// ```rust
/// use chanlog::LoggerConfig;
///
/// let config = LoggerConfig {
///     use_whitespace: true,
///     use_channels: true,
///     ..Default::default()
/// };
/// ```
///
/// The file-sink fields (`file_dir`, `file_ext`, `file_name_template`) are
/// only meaningful when `use_file` resolves true; they are ignored
/// otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Use the 256-color palette instead of 16-color names.
    pub use_256: bool,
    /// Embed channel tags in output.
    pub use_channels: bool,
    /// Separate appended segments with a space.
    pub use_whitespace: bool,
    /// Print diagnostics on mutating operations.
    pub verbose: bool,
    /// Also append output to a file.
    pub use_file: bool,
    /// Directory the log file lives in; created on demand.
    pub file_dir: PathBuf,
    /// Extension appended to the computed file name.
    pub file_ext: String,
    /// strftime template formatted with the local time at construction to
    /// produce the file name.
    pub file_name_template: String,
    /// Packed flag integer; overrides the discrete booleans when nonzero.
    pub flags: u8,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            use_256: false,
            use_channels: false,
            use_whitespace: false,
            verbose: false,
            use_file: false,
            file_dir: PathBuf::from(defaults::FILE_DIR),
            file_ext: defaults::FILE_EXT.to_string(),
            file_name_template: defaults::FILE_NAME_TEMPLATE.to_string(),
            flags: 0,
        }
    }
}

impl LoggerConfig {
    /// Resolve the configuration to its switches and canonical flag bits.
    ///
    /// Nonzero `flags` take precedence over the discrete booleans; zero
    /// `flags` are derived from them. Either way the returned pair is
    /// consistent: `flags == switches.to_bits()`.
    pub fn resolve(&self) -> (FeatureFlags, u8) {
        if self.flags != 0 {
            (FeatureFlags::from_bits(self.flags), self.flags)
        } else {
            let switches = FeatureFlags {
                use_256: self.use_256,
                use_channels: self.use_channels,
                use_whitespace: self.use_whitespace,
                verbose: self.verbose,
                use_file: self.use_file,
            };
            (switches, switches.to_bits())
        }
    }
}
