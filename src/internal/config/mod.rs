// src/internal/config/mod.rs

#[path = "_config.rs"]
pub mod config;

pub use self::config::{LoggyConfig, DEFAULT_SEPARATOR, VERSION};
