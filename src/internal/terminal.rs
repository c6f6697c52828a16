// src/internal/terminal.rs

/// Opt the console into ANSI escape interpretation.
///
/// Windows consoles need virtual terminal processing switched on before
/// 24-bit color escapes render; everywhere else this is a no-op.
#[cfg(windows)]
pub fn enable_ansi_support() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
pub fn enable_ansi_support() -> bool {
    true
}
