//! Configuration structures and loading logic.

mod io;

pub use io::{ConfigError, config_dir, config_path};

use serde::{Deserialize, Serialize};

use crate::render::{Label, Layer, OutputStyle};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub resolve: ResolveConfig,
}

/// How resolved colors are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `foreground` colors the text, `background` paints a swatch behind it.
    pub layer: Layer,
    /// `normalized` prints the cleaned-up name, `input` the raw argument.
    pub label: Label,
}

impl OutputConfig {
    pub fn style(&self) -> OutputStyle {
        OutputStyle {
            layer: self.layer,
            label: self.label,
        }
    }
}

/// Resolution defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Format used when `--type` is not given. Empty means auto-detect.
    pub default_type: String,
}

impl ResolveConfig {
    /// The configured hint, or `None` for auto-detection.
    pub fn default_hint(&self) -> Option<&str> {
        let hint = self.default_type.trim();
        (!hint.is_empty()).then_some(hint)
    }
}
