// src/internal/registry/mod.rs

pub mod registry;

pub use registry::{TypeRegistry, TypeStyle, DEFAULT_MAIN_COLOR};
