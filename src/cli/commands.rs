//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::registry::PatientRegistry;
use crate::storage::{JsonFileStore, MemoryStore, PatientStore};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Start {
            config,
            port,
            in_memory,
        } => start(config.as_deref(), port, in_memory),
    }
}

/// Create the data file holding an empty collection.
///
/// Refuses to overwrite an existing store.
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let store = JsonFileStore::new(config.data_path());

    store.initialize()?;
    Ok(())
}

/// Build the registry the server will use
pub fn build_registry(config: &Config, in_memory: bool) -> PatientRegistry {
    let store: Arc<dyn PatientStore> = if in_memory {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(JsonFileStore::new(config.data_path()))
    };
    PatientRegistry::with_write_gate(store, config.serialize_writes)
}

/// Load configuration and serve the HTTP API until interrupted
pub fn start(config_path: Option<&Path>, port: Option<u16>, in_memory: bool) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = Config::resolve(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let store_label = if in_memory {
        "memory".to_string()
    } else {
        config.data_file.clone()
    };
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_file", &store_label),
            ("serialize_writes", &config.serialize_writes.to_string()),
            ("port", &config.server.port.to_string()),
        ],
    );

    let registry = Arc::new(build_registry(&config, in_memory));
    let server = HttpServer::with_registry(config.server.clone(), registry);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> std::path::PathBuf {
        let data_file = dir.path().join("data/patients.json");
        let config_path = dir.path().join("patientdb.json");
        fs::write(
            &config_path,
            format!(r#"{{"data_file": {:?}}}"#, data_file.display().to_string()),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_init_creates_empty_store() {
        let dir = TempDir::new().unwrap();
        let config_path = config_in(&dir);

        init(Some(&config_path)).unwrap();

        let content = fs::read_to_string(dir.path().join("data/patients.json")).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = config_in(&dir);

        init(Some(&config_path)).unwrap();
        let err = init(Some(&config_path)).unwrap_err();
        assert_eq!(err.code().code(), "PATIENTDB_CLI_ALREADY_INITIALIZED");
    }

    #[test]
    fn test_build_registry_honours_write_gate() {
        let config = Config {
            serialize_writes: false,
            ..Config::default()
        };
        assert!(!build_registry(&config, true).serializes_writes());
        assert!(build_registry(&Config::default(), true).serializes_writes());
    }
}
