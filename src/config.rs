//! Storage location configuration.
//!
//! The only configurable aspect of the calculator is where the history
//! ledger lives.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the ledger location.
pub const HISTORY_DB_ENV: &str = "CALC_HISTORY_DB";

/// Ledger file used when nothing else is configured.
pub const DEFAULT_HISTORY_DB: &str = "calc_history.db";

/// Errors raised while resolving configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Ledger path must not be empty")]
    EmptyPath,
}

/// Where the history ledger is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_DB),
        }
    }
}

impl LedgerConfig {
    /// Use an explicit ledger file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(Self { path })
    }

    /// Resolve the ledger location from [`HISTORY_DB_ENV`], falling back
    /// to [`DEFAULT_HISTORY_DB`] in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        match lookup(HISTORY_DB_ENV) {
            Some(value) => Self::new(value),
            None => Ok(Self::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
