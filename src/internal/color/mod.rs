// src/internal/color/mod.rs

pub mod convert;
pub mod format;
pub mod types;

pub use convert::{ansi_to_rgb, hex_to_rgb};
pub use format::{colorize, format_color, format_rgb, strip_ansi, RESET};
pub use types::{Color, FormatOptions, LogOptions, Rgb};
