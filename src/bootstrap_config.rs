use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(version, about)]
pub struct BootstrapConfig {
    #[clap(short('c'), long("config"), env("CHAIN_LOGGER_CONFIG"))]
    pub config_file: Option<PathBuf>,
    #[clap(short('e'), long("error-log"), env("CHAIN_LOGGER_ERROR_LOG"))]
    pub error_log: Option<PathBuf>,
    #[clap(short('l'), long("log-level"), env("CHAIN_LOGGER_LOG_LEVEL"), default_value_t, value_enum)]
    pub log_level: LogLevel,
}

impl BootstrapConfig {
    pub fn read() -> Self {
        BootstrapConfig::parse()
    }
}

#[derive(clap::ValueEnum, Clone, Default)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
