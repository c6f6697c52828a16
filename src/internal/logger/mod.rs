// src/internal/logger/mod.rs

pub mod diagnostics;
pub mod dump;
pub mod logger;

pub use diagnostics::init_diagnostics;
pub use dump::{default_log_path, LogFile};
pub use logger::{ConsoleLogger, DEFAULT_TYPE};

// The `loggy!` macro is exported at the crate root via #[macro_export].
