// src/internal/registry/registry.rs

use std::collections::HashMap;
use tracing::debug;

use crate::internal::color::{hex_to_rgb, Color, Rgb, RESET};
use crate::internal::error::{LoggyError, Result};

/// Color used for `MAIN` unless configured otherwise, `#0077b6`
pub const DEFAULT_MAIN_COLOR: Rgb = Rgb(0x00, 0x77, 0xb6);

/// What a type name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStyle {
    Color(Rgb),
    /// The built-in `ENDC` entry: a reset, not a color
    Reset,
}

impl TypeStyle {
    /// The escape sequence emitted for this entry
    pub fn ansi(&self) -> String {
        match self {
            TypeStyle::Color(rgb) => rgb.ansi_fg(),
            TypeStyle::Reset => RESET.to_string(),
        }
    }
}

/// Type name to color mapping; names are case-insensitive
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeStyle>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// A registry seeded with the built-in types and the default `MAIN` color
    pub fn new() -> Self {
        let mut types = HashMap::new();
        types.insert("NONE".to_string(), TypeStyle::Color(Rgb(255, 255, 255)));
        types.insert("DEBUG".to_string(), TypeStyle::Color(Rgb(88, 88, 88)));
        types.insert("WARNING".to_string(), TypeStyle::Color(Rgb(252, 163, 17)));
        types.insert("ERROR".to_string(), TypeStyle::Color(Rgb(230, 57, 70)));
        types.insert("ENDC".to_string(), TypeStyle::Reset);
        types.insert("MAIN".to_string(), TypeStyle::Color(DEFAULT_MAIN_COLOR));
        Self { types }
    }

    /// Add a type or overwrite an existing one, built-ins included
    pub fn set(&mut self, name: &str, color: &Color) -> Result<()> {
        let rgb = hex_to_rgb(color)?;
        let key = name.to_uppercase();
        debug!("Registering log type '{}' as {}", key, rgb);
        self.types.insert(key, TypeStyle::Color(rgb));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<TypeStyle> {
        self.types.get(&name.to_uppercase()).copied()
    }

    /// Resolve a type to its color, failing for unknown names and non-color entries
    pub fn resolve(&self, name: &str) -> Result<Rgb> {
        match self.get(name) {
            Some(TypeStyle::Color(rgb)) => Ok(rgb),
            Some(reset @ TypeStyle::Reset) => Err(LoggyError::MalformedAnsiSequence(reset.ansi())),
            None => Err(LoggyError::UnknownLogType(name.to_uppercase())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(&name.to_uppercase())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn count(&self) -> usize {
        self.types.len()
    }
}
