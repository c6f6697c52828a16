// src/internal/color/types.rs

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::internal::error::LoggyError;

/// Canonical 24-bit color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// The bare foreground escape for this color, `ESC[38;2;R;G;Bm`
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

/// A color as supplied by callers: either a hex string or an explicit triple.
///
/// Deserializes from a string (`"#0077b6"`, `"0077b6"`), a three element
/// sequence (`[0, 119, 182]`), or a bare integer such as `112233`, which
/// YAML and TOML produce for all-digit hex values left unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Hex(String),
    Rgb(Rgb),
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string (#RRGGBB or RRGGBB) or an [r, g, b] sequence")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
        Ok(Color::Hex(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Color, E> {
        Ok(Color::Hex(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Color, E> {
        // `000000` arrives as 0; restore the leading zeros.
        Ok(Color::Hex(format!("{:06}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Color, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Color, A::Error> {
        let mut channel = |i: usize| -> Result<u8, A::Error> {
            seq.next_element::<u8>()?
                .ok_or_else(|| de::Error::invalid_length(i, &"three color components"))
        };
        let rgb = Rgb(channel(0)?, channel(1)?, channel(2)?);
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &"three color components"));
        }
        Ok(Color::Rgb(rgb))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}

impl Color {
    /// Normalize to the canonical triple
    pub fn to_rgb(&self) -> Result<Rgb, LoggyError> {
        super::convert::hex_to_rgb(self)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::Hex(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::Hex(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(triple: (u8, u8, u8)) -> Self {
        Color::Rgb(triple.into())
    }
}

impl From<&Color> for Color {
    fn from(color: &Color) -> Self {
        color.clone()
    }
}

impl FromStr for Color {
    type Err = LoggyError;

    /// Parses and validates a hex color eagerly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = Color::Hex(s.to_string());
        color.to_rgb()?;
        Ok(color)
    }
}

/// Style toggles appended to a foreground escape.
///
/// Each flag is independent; the emitted codes always follow the fixed
/// order bold, italic, underline, strike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    pub fn with_italic(mut self, on: bool) -> Self {
        self.italic = on;
        self
    }

    pub fn with_underline(mut self, on: bool) -> Self {
        self.underline = on;
        self
    }

    pub fn with_strike(mut self, on: bool) -> Self {
        self.strike = on;
        self
    }

    /// SGR codes for the enabled toggles
    pub fn codes(&self) -> impl Iterator<Item = u8> {
        [
            (self.bold, 1),
            (self.italic, 3),
            (self.underline, 4),
            (self.strike, 9),
        ]
        .into_iter()
        .filter_map(|(on, code)| on.then_some(code))
    }
}

/// Options for a single `log` call: the style toggles plus the type label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub prefix: bool,
    pub format: FormatOptions,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            prefix: true,
            format: FormatOptions::default(),
        }
    }
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, on: bool) -> Self {
        self.prefix = on;
        self
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

impl From<FormatOptions> for LogOptions {
    fn from(format: FormatOptions) -> Self {
        Self {
            prefix: true,
            format,
        }
    }
}
