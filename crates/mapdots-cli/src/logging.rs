//! Tracing subscriber setup
//!
//! Logs go to stderr, or to `log_file` when one is configured. `RUST_LOG`
//! wins over the level picked from `--verbose`.

use std::fs::OpenOptions;

use mapdots_core::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn init(config: &Config, verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("mapdots_core={},mapdots_cli={}", log_level, log_level))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    // Ignore the error if a subscriber is already installed
    match &config.log_file {
        Some(path) => {
            let file = match OpenOptions::new().create(true).append(true).open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not open log file {:?}: {}", path, e);
                    let _ = builder.with_writer(std::io::stderr).try_init();
                    return;
                }
            };
            let _ = builder.with_ansi(false).with_writer(file).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    debug!(path = ?config.dots_path(), "Logging initialized");
}
