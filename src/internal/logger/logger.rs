// src/internal/logger/logger.rs

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::dump::LogFile;
use crate::internal::color::{self, format_rgb, Color, FormatOptions, LogOptions, Rgb, RESET};
use crate::internal::config::{LoggyConfig, DEFAULT_SEPARATOR};
use crate::internal::error::Result;
use crate::internal::registry::{TypeRegistry, TypeStyle};
use crate::internal::terminal::enable_ansi_support;

/// Type used when a caller does not name one
pub const DEFAULT_TYPE: &str = "MAIN";

/// Colorized console logger with optional plain-text mirroring.
///
/// Each instance owns its own type registry and settings, so differently
/// configured loggers can coexist.
///
/// ```no_run
/// use loggy::{ConsoleLogger, FormatOptions, LogOptions};
///
/// let mut logger = ConsoleLogger::new();
/// logger.set_type("MAIN", "#f72585")?;
/// logger.main("Hello world!")?;
/// logger.log("A really bad thing happened!", "error", &LogOptions::default())?;
/// logger.log(
///     "This text will really stand out.",
///     "main",
///     &LogOptions::from(FormatOptions::new().with_bold(true).with_underline(true)),
/// )?;
/// # Ok::<(), loggy::LoggyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    registry: TypeRegistry,
    separator: String,
    dump_file: bool,
    log_file: LogFile,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Built-in types, `|` separator, mirroring on into `<program>.log`
    pub fn new() -> Self {
        if !enable_ansi_support() {
            debug!("Terminal did not accept ANSI mode; colors may render raw");
        }
        Self {
            registry: TypeRegistry::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            dump_file: true,
            log_file: LogFile::default(),
        }
    }

    pub fn from_config(config: &LoggyConfig) -> Result<Self> {
        config.validate()?;

        let mut logger = Self::new();
        logger.set_type(DEFAULT_TYPE, &config.main_color)?;
        for (name, color) in &config.types {
            logger.set_type(name, color)?;
        }
        logger.separator = config.separator.clone();
        logger.dump_file = config.dump_file;
        if let Some(path) = &config.log_file {
            logger.log_file = LogFile::new(path);
        }
        debug!(
            "Logger configured with {} types, mirroring {} to {}",
            logger.registry.count(),
            if logger.dump_file { "on" } else { "off" },
            logger.log_file.path().display()
        );
        Ok(logger)
    }

    /// Add a type or recolor an existing one; the name is case-insensitive
    pub fn set_type(&mut self, name: &str, color: impl Into<Color>) -> Result<()> {
        self.registry.set(name, &color.into())
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Registered type names, sorted
    pub fn types(&self) -> Vec<String> {
        self.registry.names()
    }

    /// The color assigned to a type, if it has one
    pub fn color_of(&self, name: &str) -> Option<Rgb> {
        match self.registry.get(name)? {
            TypeStyle::Color(rgb) => Some(rgb),
            TypeStyle::Reset => None,
        }
    }

    pub fn dump_file(&self) -> bool {
        self.dump_file
    }

    /// Turn file mirroring on or off
    pub fn set_dump_file(&mut self, enabled: bool) {
        self.dump_file = enabled;
    }

    pub fn log_file_path(&self) -> &Path {
        self.log_file.path()
    }

    pub fn set_log_file(&mut self, path: impl Into<PathBuf>) {
        self.log_file = LogFile::new(path);
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// The line `log` would print, reset sequence included
    pub fn render(&self, message: &str, log_type: &str, options: &LogOptions) -> Result<String> {
        Ok(format!("{}{}", self.compose(message, log_type, options)?, RESET))
    }

    /// Print a line to stdout and mirror it to the log file when enabled
    pub fn log(&self, message: &str, log_type: &str, options: &LogOptions) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.log_to(&mut handle, message, log_type, options)
    }

    /// `log` against an arbitrary writer instead of stdout
    pub fn log_to<W: Write>(
        &self,
        out: &mut W,
        message: &str,
        log_type: &str,
        options: &LogOptions,
    ) -> Result<()> {
        // Resolve the type before anything is written anywhere.
        let line = self.compose(message, log_type, options)?;
        writeln!(out, "{}{}", line, RESET)?;
        self.dump(&line)
    }

    /// Mirror `message` to the log file, escapes removed, if mirroring is on
    pub fn dump(&self, message: &str) -> Result<()> {
        if !self.dump_file {
            return Ok(());
        }
        self.log_file.append(message)
    }

    pub fn main(&self, message: &str) -> Result<()> {
        self.log(message, DEFAULT_TYPE, &LogOptions::default())
    }

    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(message, "DEBUG", &LogOptions::default())
    }

    pub fn warning(&self, message: &str) -> Result<()> {
        self.log(message, "WARNING", &LogOptions::default())
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.log(message, "ERROR", &LogOptions::default())
    }

    /// Color a fragment without touching any registry
    pub fn colorize(
        message: &str,
        color: impl Into<Color>,
        options: &FormatOptions,
    ) -> Result<String> {
        color::colorize(message, &color.into(), options)
    }

    /// Line body without the trailing reset
    fn compose(&self, message: &str, log_type: &str, options: &LogOptions) -> Result<String> {
        let name = log_type.to_uppercase();
        let rgb = self.registry.resolve(&name)?;

        let mut line = rgb.ansi_fg();
        if options.prefix {
            line.push_str(&name);
            line.push(' ');
        }
        line.push_str(&self.separator);
        line.push(' ');
        line.push_str(&format_rgb(rgb, &options.format));
        line.push_str(message);
        Ok(line)
    }
}

/// Log a formatted message through a logger under the given type
#[macro_export]
macro_rules! loggy {
    ($logger:expr, $log_type:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*), $log_type, &$crate::LogOptions::default())
    };
}
