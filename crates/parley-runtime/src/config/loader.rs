//! Configuration loader using figment.
//!
//! Sources are layered, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. TOML file (`parley.toml` in the working directory, or an explicit path)
//! 3. Environment variables (`PARLEY_*`, `__` as section separator, e.g.
//!    `PARLEY_LOGGING__LEVEL=debug` → `logging.level = "debug"`)

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::debug;

use super::schema::ParleyConfig;
use crate::error::{ConfigError, ConfigResult};

/// Default config file name searched in the working directory.
const DEFAULT_FILE: &str = "parley.toml";

/// Layered configuration loader.
///
/// ```rust,ignore
/// let config = ConfigLoader::new()
///     .file("config/parley.toml")
///     .with_env()
///     .load()?;
/// ```
pub struct ConfigLoader {
    figment: Figment,
    env: bool,
    missing_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Starts from built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(ParleyConfig::default())),
            env: false,
            missing_file: None,
        }
    }

    /// Layers an explicit TOML file. A missing file fails at
    /// [`load`](Self::load) time; figment would otherwise skip it silently.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            self.figment = self.figment.merge(Toml::file(path));
        } else {
            self.missing_file = Some(path.to_path_buf());
        }
        self
    }

    /// Layers `parley.toml` from the working directory when present.
    pub fn with_current_dir(mut self) -> Self {
        let path = PathBuf::from(DEFAULT_FILE);
        if path.exists() {
            debug!(file = DEFAULT_FILE, "loading config file");
            self.figment = self.figment.merge(Toml::file(path));
        }
        self
    }

    /// Layers `PARLEY_*` environment variables on top.
    pub fn with_env(mut self) -> Self {
        self.env = true;
        self
    }

    /// Extracts the final configuration.
    pub fn load(self) -> ConfigResult<ParleyConfig> {
        if let Some(path) = self.missing_file {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let mut figment = self.figment;
        if self.env {
            figment = figment.merge(Env::prefixed("PARLEY_").split("__"));
        }
        figment.extract().map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads configuration from the default locations: built-in defaults, then
/// `parley.toml` in the working directory, then `PARLEY_*` env vars.
pub fn load_config() -> ConfigResult<ParleyConfig> {
    ConfigLoader::new().with_current_dir().with_env().load()
}
