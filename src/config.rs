use crate::bootstrap_config::BootstrapConfig;
use common::types::config::Config;
use log::{debug, info};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub(super) fn load_config(bootstrap_config: &BootstrapConfig) -> Result<Config, ConfigError> {
    let config = match &bootstrap_config.config_file {
        Some(path) => read_config_file(path)?,
        None => {
            debug!(target: "main", "No config file given, using the default chain");
            Config::default()
        }
    };

    Ok(match &bootstrap_config.error_log {
        Some(path) => config.with_error_log(path.clone()),
        None => config,
    })
}

fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|err| ConfigError::Open(path.to_path_buf(), err))?;
    let config: Config = serde_yml::from_str(&contents)
        .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;

    info!(target: "main", "Config read successfully from '{path:?}'");

    Ok(config)
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    Open(PathBuf, #[source] std::io::Error),
    Parse(PathBuf, #[source] serde_yml::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Open(path, err) => write!(f, "Could not open config file '{path:?}': {err}"),
            ConfigError::Parse(path, err) => write!(f, "Could not read config file '{path:?}': {err}"),
        }
    }
}
