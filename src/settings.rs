//! Layered dashboard configuration: built-in defaults, an optional TOML
//! file, then `LANDTEMP_*` environment variables. CLI flags are applied on
//! top by the caller.

use crate::error::Result;
use crate::utils::constants::{DEFAULT_CONFIG_FILE, DEFAULT_DATA_PATH, ENV_PREFIX, ROLLING_WINDOW};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    pub data_path: PathBuf,

    #[validate(range(min = 1))]
    pub rolling_window: usize,

    pub show_progress: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            rolling_window: ROLLING_WINDOW,
            show_progress: true,
        }
    }
}

impl DashboardConfig {
    /// Load from `path` if given (it must exist), else from `landtemp.toml`
    /// in the working directory when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("data_path", defaults.data_path.to_string_lossy().to_string())?
            .set_default("rolling_window", defaults.rolling_window as u64)?
            .set_default("show_progress", defaults.show_progress)?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: DashboardConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self
    }
}
