use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::internal::color::Color;
use crate::internal::error::Result;
use crate::internal::registry::DEFAULT_MAIN_COLOR;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Character placed between the type label and the message
pub const DEFAULT_SEPARATOR: &str = "|";

/// Logger settings, loadable from any file format the `config` crate reads.
///
/// ```yaml
/// main_color: "#f72585"
/// separator: "|"
/// dump_file: true
/// log_file: build.log
/// types:
///   notice: "#94d2bd"
///   warning: [86, 11, 173]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggyConfig {
    #[serde(default = "default_main_color")]
    pub main_color: Color,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_true")]
    pub dump_file: bool,
    /// Overrides the `<program>.log` default
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Extra types, or new colors for built-in ones; names are case-insensitive
    #[serde(default)]
    pub types: BTreeMap<String, Color>,
}

fn default_main_color() -> Color {
    Color::Hex(DEFAULT_MAIN_COLOR.to_string())
}
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for LoggyConfig {
    fn default() -> Self {
        Self {
            main_color: default_main_color(),
            separator: default_separator(),
            dump_file: true,
            log_file: None,
            types: BTreeMap::new(),
        }
    }
}

impl LoggyConfig {
    /// Load from `path`; the file must exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(path.as_ref(), true)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults: {}", path.display());
        }
        Self::build(path, false)
    }

    fn build(path: &Path, required: bool) -> Result<Self> {
        info!("Loading logger config from: {}", path.display());

        let settings = Config::builder()
            .set_default("main_color", DEFAULT_MAIN_COLOR.to_string())?
            .set_default("separator", DEFAULT_SEPARATOR)?
            .set_default("dump_file", true)?
            .add_source(File::from(path).required(required))
            .build()?;

        let config: LoggyConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every configured color up front, and that no two type names
    /// differ only by case
    pub fn validate(&self) -> Result<()> {
        self.main_color.to_rgb()?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        for (name, color) in &self.types {
            color.to_rgb()?;
            if let Some(previous) = seen.insert(name.to_uppercase(), name) {
                return Err(ConfigError::Message(format!(
                    "log types '{}' and '{}' name the same type",
                    previous, name
                ))
                .into());
            }
        }
        Ok(())
    }
}
