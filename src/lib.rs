pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::color::{
    ansi_to_rgb, colorize, format_color, hex_to_rgb, strip_ansi, Color, FormatOptions, LogOptions,
    Rgb, RESET,
};
pub use internal::config::LoggyConfig;
pub use internal::error::{LoggyError, Result};
pub use internal::logger::{ConsoleLogger, LogFile, DEFAULT_TYPE};
pub use internal::registry::{TypeRegistry, TypeStyle};
