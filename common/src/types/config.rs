use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::Severity;

pub const DEFAULT_ERROR_LOG: &str = "logs.txt";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1")]
    Version1 {
        #[serde(default = "default_error_log")]
        error_log: PathBuf,
        // Order in which the handlers are linked, head first
        #[serde(default = "default_chain")]
        chain: Vec<HandlerKind>,
    },
}

impl Config {
    pub fn error_log(&self) -> &PathBuf {
        match self {
            Config::Version1 { error_log, .. } => error_log,
        }
    }

    pub fn chain(&self) -> &[HandlerKind] {
        match self {
            Config::Version1 { chain, .. } => chain,
        }
    }

    pub fn with_error_log(self, path: PathBuf) -> Self {
        match self {
            Config::Version1 { chain, .. } => Config::Version1 { error_log: path, chain },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::Version1 {
            error_log: default_error_log(),
            chain: default_chain(),
        }
    }
}

fn default_error_log() -> PathBuf {
    DEFAULT_ERROR_LOG.into()
}

fn default_chain() -> Vec<HandlerKind> {
    vec![
        HandlerKind::FatalError,
        HandlerKind::Error,
        HandlerKind::Warning,
        HandlerKind::Unknown,
    ]
}

/// The handler variants that can be linked into a chain.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandlerKind {
    Warning,
    Error,
    FatalError,
    Unknown,
}

impl HandlerKind {
    /// The classification a handler of this kind consumes.
    pub fn responsibility(&self) -> Severity {
        match self {
            HandlerKind::Warning => Severity::Warning,
            HandlerKind::Error => Severity::Error,
            HandlerKind::FatalError => Severity::FatalError,
            HandlerKind::Unknown => Severity::Unknown,
        }
    }
}
