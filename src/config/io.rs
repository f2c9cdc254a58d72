//! Configuration file I/O: path resolution and loading.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use super::Config;

const APP_DIR: &str = "colorview";

/// Directory holding `config.toml`, or `./colorview` when no base directory
/// is known.
pub fn config_dir() -> PathBuf {
    base_dir(|name| std::env::var_os(name))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Per-user config base: `%APPDATA%` on Windows, otherwise
/// `$XDG_CONFIG_HOME` or `$HOME/.config`. Empty variables count as unset.
fn base_dir(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let non_empty = |name: &str| var(name).filter(|v| !v.is_empty()).map(PathBuf::from);
    if cfg!(windows) {
        non_empty("APPDATA")
    } else {
        non_empty("XDG_CONFIG_HOME")
            .or_else(|| non_empty("HOME").map(|home| home.join(".config")))
    }
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load config from `explicit`, or from [`config_path`] when `None`.
    ///
    /// Never fails: problems are logged and defaults returned. A missing
    /// default config file is normal and only logged at debug level.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit.map_or_else(config_path, Path::to_path_buf);
        match Self::try_load(&path) {
            Ok(cfg) => {
                info!("config: loaded from {}", path.display());
                cfg
            }
            Err(ConfigError::Read { source, .. })
                if explicit.is_none() && source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!("config: no file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("config: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`, preserving the reason on failure.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Pretty TOML, as printed by `--print-config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
