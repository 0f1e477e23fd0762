//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::object::{ObjectOptions, DEFAULT_INDENT, DEFAULT_MAX_DEPTH};

/// Root configuration for a debug printer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Whether the printer starts enabled.
    pub enabled: bool,

    /// Line-info template. `None` follows the process-wide default.
    pub format: Option<String>,

    /// Report only the final path component of source files.
    pub basename: bool,

    /// Left-justify the line info to this many characters (0 = off).
    pub ljust_width: usize,

    /// Return an error instead of doing nothing while disabled.
    pub should_raise: bool,

    /// Where lines are written.
    pub output: OutputTarget,

    /// Object printer settings.
    pub object: ObjectConfig,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: None,
            basename: false,
            ljust_width: 0,
            should_raise: false,
            output: OutputTarget::default(),
            object: ObjectConfig::default(),
        }
    }
}

impl PrinterConfig {
    /// Parse a config from TOML text without validating it.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Output stream for a printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
}

/// Object printer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Text repeated once per nesting level.
    pub indent: String,

    /// Container nesting allowed before printing fails.
    pub max_depth: usize,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ObjectConfig {
    pub fn options(&self) -> ObjectOptions {
        ObjectOptions::default()
            .with_indent(self.indent.clone())
            .with_max_depth(self.max_depth)
    }
}
