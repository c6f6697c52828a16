// src/internal/mod.rs

pub mod color;
pub mod config;
pub mod error;
pub mod logger;
pub mod registry;
pub mod terminal;
