//! CLI module for patientdb
//!
//! Provides command-line interface for:
//! - init: Create the empty patient store
//! - start: Serve the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_registry, init, run, run_command, start};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
