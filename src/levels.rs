//! # Level Registry
//!
//! Named log levels and their color assignments. Levels are flat (there is
//! no severity ordering or hierarchy) and each maps to a [`ColorPair`]
//! holding both palette representations so the renderer can pick whichever
//! the terminal supports.
//!
//! Keys are case-insensitive and stored uppercased: `"debug"`, `"Debug"`
//! and `"DEBUG"` all address the same entry. Every registry starts with the
//! three seed levels `LOG`, `WRN` and `ERR`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::LogError;

/// A level's color in both palettes.
///
/// `name16` is a color name the 16-color palette understands (e.g.
/// `"yellow"`); `code256` is the equivalent xterm-256 color index. Contents
/// are not validated here: an unknown name or nonsense code is the render
/// capability's problem when the level is first used, not the registry's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Color name for the 16-color palette.
    pub name16: String,
    /// Color index for the 256-color palette.
    pub code256: u8,
}

impl ColorPair {
    /// Convenience constructor from a name and a 256-color index.
    pub fn new(name16: &str, code256: u8) -> Self {
        Self {
            name16: name16.to_string(),
            code256,
        }
    }
}

/// Mapping from uppercased level names to color pairs.
///
/// Per-instance state: two independently configured loggers never share a
/// registry, and registrations on one are invisible to the other.
#[derive(Clone, Debug)]
pub struct LevelRegistry {
    levels: HashMap<String, ColorPair>,
}

impl Default for LevelRegistry {
    /// A registry pre-seeded with the three built-in levels.
    fn default() -> Self {
        let mut levels = HashMap::new();
        levels.insert("LOG".to_string(), ColorPair::new("white", 15));
        levels.insert("WRN".to_string(), ColorPair::new("yellow", 11));
        levels.insert("ERR".to_string(), ColorPair::new("red", 9));
        Self { levels }
    }
}

impl LevelRegistry {
    /// Insert or overwrite a level under its uppercased key.
    ///
    /// Overwriting a seed level is allowed; callers that want `LOG` to be
    /// green get green. Returns a copy of the stored pair.
    pub fn add(&mut self, key: &str, pair: ColorPair) -> ColorPair {
        self.levels.insert(key.to_uppercase(), pair.clone());
        pair
    }

    /// Look up a level case-insensitively.
    ///
    /// A missing key is [`LogError::UnknownLevel`]; there is no default
    /// color to fall back to.
    pub fn resolve(&self, key: &str) -> Result<&ColorPair, LogError> {
        let upper = key.to_uppercase();
        self.levels
            .get(&upper)
            .ok_or(LogError::UnknownLevel(upper))
    }
}
