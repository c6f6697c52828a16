// src/internal/logger/dump.rs

use chrono::Local;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::internal::color::strip_ansi;
use crate::internal::error::Result;

/// `<program>.log`, relative to the working directory
pub fn default_log_path() -> PathBuf {
    let mut name: OsString = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|stem| stem.to_os_string()))
        .unwrap_or_else(|| OsString::from("loggy"));
    name.push(".log");
    PathBuf::from(name)
}

/// Plain-text mirror of printed log lines.
///
/// The file is opened in append mode, written and closed on every call; no
/// handle outlives a single append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl Default for LogFile {
    fn default() -> Self {
        Self::new(default_log_path())
    }
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` as `[HH:MM:SS] <message>\n` with escapes removed
    pub fn append(&self, message: &str) -> Result<()> {
        let line = format!(
            "{}{}\n",
            Local::now().format("[%H:%M:%S] "),
            strip_ansi(message)
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        trace!("Appended {} bytes to {}", line.len(), self.path.display());
        Ok(())
    }
}
