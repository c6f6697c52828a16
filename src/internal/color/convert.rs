// src/internal/color/convert.rs

use regex::Regex;
use std::sync::OnceLock;

use super::types::{Color, Rgb};
use crate::internal::error::{LoggyError, Result};

fn ansi_fg_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\x1b\[38;2;(\d+);(\d+);(\d+)(?:;[0-9;]*)?m").expect("valid ANSI color regex")
    })
}

/// Normalize a color to its RGB triple.
///
/// An `Rgb` value is returned unchanged. A hex string may carry a leading
/// `#`; only its first six characters are read.
pub fn hex_to_rgb(color: &Color) -> Result<Rgb> {
    let hex = match color {
        Color::Rgb(rgb) => return Ok(*rgb),
        Color::Hex(hex) => hex,
    };

    let digits = hex.trim_start_matches('#');
    let invalid = || LoggyError::InvalidColorFormat(hex.clone());

    let head = digits.get(0..6).ok_or_else(invalid)?;
    if !head.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&head[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Recover the triple from a 24-bit foreground escape, `ESC[38;2;R;G;Bm`.
///
/// Trailing style codes inside the same sequence are ignored.
pub fn ansi_to_rgb(sequence: &str) -> Result<Rgb> {
    let malformed = || LoggyError::MalformedAnsiSequence(sequence.to_string());

    let caps = ansi_fg_regex().captures(sequence).ok_or_else(malformed)?;
    let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| malformed());
    Ok(Rgb(channel(1)?, channel(2)?, channel(3)?))
}
