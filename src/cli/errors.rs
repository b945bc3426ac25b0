//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code. Store
//! failures keep the data file path in the message.

use std::fmt;

use crate::storage::StorageError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Config file missing, unparsable or invalid
    ConfigError,
    /// Data file could not be created or written
    StoreError,
    /// `init` found an existing data file
    AlreadyInitialized,
    /// Runtime or listener could not start
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PATIENTDB_CLI_CONFIG_ERROR",
            Self::StoreError => "PATIENTDB_CLI_STORE_ERROR",
            Self::AlreadyInitialized => "PATIENTDB_CLI_ALREADY_INITIALIZED",
            Self::BootFailed => "PATIENTDB_CLI_BOOT_FAILED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AlreadyExists(path) => Self::new(
                CliErrorCode::AlreadyInitialized,
                format!("Patient store already exists at {}; remove it to start over", path),
            ),
            other => Self::new(
                CliErrorCode::StoreError,
                format!("Patient store unavailable: {}", other),
            ),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
