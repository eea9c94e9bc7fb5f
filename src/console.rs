//! # Console Render Capability
//!
//! The logger core never talks to a terminal directly; it hands the final
//! formatted line, a resolved color, and a set of text attributes to a
//! [`ConsoleSink`]. The default sink renders with the `colored` crate for
//! the 16-color palette and a raw SGR escape for 256-color codes. Tests
//! substitute a recording sink to observe dispatch without a terminal.

use colored::{control, Color, ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The palette member selected for a render call.
///
/// A [`ColorPair`](crate::ColorPair) carries both representations; the
/// logger picks one according to its `use_256` switch and passes it here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderColor {
    /// A 16-color palette name, e.g. `"yellow"`.
    Named(String),
    /// An xterm-256 color index.
    Ansi256(u8),
}

impl fmt::Display for RenderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderColor::Named(name) => write!(f, "{}", name),
            RenderColor::Ansi256(code) => write!(f, "{}", code),
        }
    }
}

/// Text attributes a sink may apply on top of the color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAttr {
    Bold,
    Dimmed,
    Italic,
    Underline,
    Blink,
    Reversed,
    Hidden,
    Strikethrough,
}

impl TextAttr {
    /// SGR parameter for this attribute, used on the raw 256-color path.
    fn sgr_code(self) -> u8 {
        match self {
            TextAttr::Bold => 1,
            TextAttr::Dimmed => 2,
            TextAttr::Italic => 3,
            TextAttr::Underline => 4,
            TextAttr::Blink => 5,
            TextAttr::Reversed => 7,
            TextAttr::Hidden => 8,
            TextAttr::Strikethrough => 9,
        }
    }

    /// Apply this attribute through the `colored` styling API.
    fn style(self, text: ColoredString) -> ColoredString {
        match self {
            TextAttr::Bold => text.bold(),
            TextAttr::Dimmed => text.dimmed(),
            TextAttr::Italic => text.italic(),
            TextAttr::Underline => text.underline(),
            TextAttr::Blink => text.blink(),
            TextAttr::Reversed => text.reversed(),
            TextAttr::Hidden => text.hidden(),
            TextAttr::Strikethrough => text.strikethrough(),
        }
    }
}

/// Capability that writes a finished log line to a console.
///
/// Implementations are expected to be best-effort: rendering has no failure
/// mode in this design, and a sink that cannot color simply writes plain
/// text. Interior mutability is the implementor's concern; the logger only
/// ever calls through `&self`.
pub trait ConsoleSink {
    /// Write one line with the given color and attributes.
    fn render(&self, line: &str, color: &RenderColor, attrs: &[TextAttr]);
}

/// Default sink: stdout with ANSI coloring.
///
/// Named colors go through the `colored` crate, which handles tty detection
/// and the `NO_COLOR` convention. 256-color codes are not expressible in
/// `colored`'s palette enum, so that path emits the `38;5;<n>` SGR sequence
/// directly while still honoring the crate's global colorize switch.
#[derive(Debug, Default)]
pub struct AnsiConsole;

impl AnsiConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for AnsiConsole {
    fn render(&self, line: &str, color: &RenderColor, attrs: &[TextAttr]) {
        match color {
            RenderColor::Named(name) => {
                // Unknown names degrade to white inside `colored`.
                let mut styled = line.color(Color::from(name.as_str()));
                for attr in attrs {
                    styled = attr.style(styled);
                }
                println!("{}", styled);
            }
            RenderColor::Ansi256(code) => {
                if control::SHOULD_COLORIZE.should_colorize() {
                    let mut sgr = format!("38;5;{}", code);
                    for attr in attrs {
                        sgr.push_str(&format!(";{}", attr.sgr_code()));
                    }
                    println!("\x1b[{}m{}\x1b[0m", sgr, line);
                } else {
                    println!("{}", line);
                }
            }
        }
    }
}

/// One captured render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRecord {
    /// The finished line, exactly as it would hit the terminal.
    pub line: String,
    /// The palette member the logger selected.
    pub color: RenderColor,
    /// Attributes requested for the line.
    pub attrs: Vec<TextAttr>,
}

/// Sink that records render calls in memory instead of writing them.
///
/// Useful for capturing output in tests or embedding scenarios. Clones
/// share the same backing store, so a caller can keep one handle and hand
/// another to [`Logger::with_console`](crate::Logger::with_console).
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: std::sync::Arc<std::sync::Mutex<Vec<RenderRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every render call so far, in order.
    pub fn records(&self) -> Vec<RenderRecord> {
        self.records.lock().expect("memory sink poisoned").clone()
    }
}

impl ConsoleSink for MemorySink {
    fn render(&self, line: &str, color: &RenderColor, attrs: &[TextAttr]) {
        self.records.lock().expect("memory sink poisoned").push(RenderRecord {
            line: line.to_string(),
            color: color.clone(),
            attrs: attrs.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SGR parameters must match the ANSI attribute table.
    #[test]
    fn test_attr_sgr_codes() {
        assert_eq!(TextAttr::Bold.sgr_code(), 1);
        assert_eq!(TextAttr::Underline.sgr_code(), 4);
        assert_eq!(TextAttr::Reversed.sgr_code(), 7);
        assert_eq!(TextAttr::Strikethrough.sgr_code(), 9);
    }

    /// Display form is what verbose diagnostics print.
    #[test]
    fn test_render_color_display() {
        assert_eq!(RenderColor::Named("red".to_string()).to_string(), "red");
        assert_eq!(RenderColor::Ansi256(14).to_string(), "14");
    }
}
