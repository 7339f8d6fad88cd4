//! Color theme and styling functions for CLI output.
//!
//! Uses the Ayu Dark color palette for consistent terminal styling.
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Icons are small Unicode symbols rather than emoji.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// ---------------------------------------------------------------------------
// Status icons
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖
pub const ICON_INFO: &str = "\u{2139}"; // ℹ

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

/// Colors a string with a truecolor foreground, or returns it unchanged
/// when color is off.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

/// Green, for successful steps.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Yellow, for warnings.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Red, for failures.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Gray, for secondary detail.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Blue, for highlighted values like paths and commands.
pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

/// Bold, no color change.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Status lines -- icon plus message, used for step-by-step progress output
// ---------------------------------------------------------------------------

/// A success line: green check icon plus message.
pub fn status_pass(message: &str) -> String {
    format!("{} {}", color_str(ICON_PASS, PASS), message)
}

/// A warning line: yellow warning icon plus message.
pub fn status_warn(message: &str) -> String {
    format!("{} {}", color_str(ICON_WARN, WARN), message)
}

/// A failure line: red cross icon plus message.
pub fn status_fail(message: &str) -> String {
    format!("{} {}", color_str(ICON_FAIL, FAIL), message)
}

/// An informational line: blue info icon plus message.
pub fn status_info(message: &str) -> String {
    format!("{} {}", color_str(ICON_INFO, ACCENT), message)
}
