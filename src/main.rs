mod bootstrap_config;
mod config;
mod demo;

use crate::config::load_config;
use bootstrap_config::BootstrapConfig;
use common::util::logging;
use demo::{run_demo, sample_groups};
use log::{debug, error};
use std::fmt::{Display, Formatter};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "main", "{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ChainLoggerError> {
    let bootstrap_config = BootstrapConfig::read();

    logging::initialize_logging(bootstrap_config.log_level.clone().into());

    let config = load_config(&bootstrap_config)?;
    debug!(target: "main", "Chain {:?}, error log at '{:?}'", config.chain(), config.error_log());

    run_demo(&config, sample_groups(), &mut io::stderr())?;

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum ChainLoggerError {
    Config(#[from] config::ConfigError),
    IO(#[from] std::io::Error),
}

impl Display for ChainLoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err: &dyn Display = match self {
            ChainLoggerError::Config(err) => err,
            ChainLoggerError::IO(err) => err,
        };
        let prefix = match self {
            ChainLoggerError::Config(_) => "Reading config file",
            ChainLoggerError::IO(_) => "Error during IO",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
