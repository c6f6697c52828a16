// src/internal/color/format.rs

use regex::Regex;
use std::sync::OnceLock;

use super::convert::hex_to_rgb;
use super::types::{Color, FormatOptions, Rgb};
use crate::internal::error::Result;

/// Reset sequence closing every colored span
pub const RESET: &str = "\x1b[0m";

fn escape_regex() -> &'static Regex {
    // Two-byte Fe escapes, or a CSI sequence up to its final byte.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\x1b(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("valid ANSI escape regex")
    })
}

/// Foreground escape for an already normalized triple plus style codes
pub fn format_rgb(rgb: Rgb, options: &FormatOptions) -> String {
    let mut out = format!("\x1b[38;2;{};{};{}", rgb.0, rgb.1, rgb.2);
    for code in options.codes() {
        out.push(';');
        out.push_str(&code.to_string());
    }
    out.push('m');
    out
}

/// Convert a color to a 24-bit ANSI foreground escape with style codes.
///
/// `format_color(&"#dc2f02".into(), &bold_underline)` yields
/// `"\x1b[38;2;220;47;2;1;4m"`.
pub fn format_color(color: &Color, options: &FormatOptions) -> Result<String> {
    Ok(format_rgb(hex_to_rgb(color)?, options))
}

/// Wrap `message` in the given color and styles, closed by a reset
pub fn colorize(message: &str, color: &Color, options: &FormatOptions) -> Result<String> {
    Ok(format!("{}{}{}", format_color(color, options)?, message, RESET))
}

/// Remove every ANSI escape sequence from `text`
pub fn strip_ansi(text: &str) -> String {
    escape_regex().replace_all(text, "").into_owned()
}
