//! CLI argument definitions using clap
//!
//! Commands:
//! - patientdb init [--config <path>]
//! - patientdb start [--config <path>] [--port <port>] [--in-memory]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// patientdb - patient records with validated health metrics
#[derive(Parser, Debug)]
#[command(name = "patientdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty patient store
    Init {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start the HTTP API
    Start {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,

        /// Keep patients in memory instead of the data file
        #[arg(long)]
        in_memory: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
