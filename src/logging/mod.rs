// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger.
///
/// Logs go to stderr unless `config.log_file` is set, in which case they are
/// appended to that file. `RUST_LOG` still refines per-module levels.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_env("RUST_LOG");

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.try_init()?;

    log::debug!("Logging initialized at level {}", config.log_level);
    Ok(())
}
