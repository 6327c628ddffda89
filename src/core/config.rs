// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;
use thiserror::Error;

use crate::evaluator::{DenyList, Evaluator};
use crate::models::GenerationConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read deny-list {}: {source}", path.display())]
    DenyList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Configuration for the password tools
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,

    // Strength Evaluation
    pub deny_list_path: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: GenerationConfig::DEFAULT_LENGTH,
            default_password_exclude_similar: false,

            // Strength Evaluation
            deny_list_path: None,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => {
                    let clamped =
                        length.clamp(GenerationConfig::MIN_LENGTH, GenerationConfig::MAX_LENGTH);
                    if clamped != length {
                        config.warnings.push(format!(
                            "DEFAULT_PASSWORD_LENGTH {} out of range, using {}",
                            length, clamped
                        ));
                    }
                    config.default_password_length = clamped;
                }
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_EXCLUDE_SIMILAR") {
            match val.parse() {
                Ok(exclude) => config.default_password_exclude_similar = exclude,
                Err(_) => config.warnings.push(format!(
                    "Ignoring invalid DEFAULT_PASSWORD_EXCLUDE_SIMILAR '{}'",
                    val
                )),
            }
        }

        // Strength Evaluation
        if let Some(path) = lookup("DENYLIST_PATH") {
            if !path.trim().is_empty() {
                config.deny_list_path = Some(PathBuf::from(path));
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {
                    let warning =
                        format!("Unknown log level '{}', using {}", level, config.log_level);
                    config.warnings.push(warning);
                }
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Emit the warnings collected by [`Config::from_lookup`].
    ///
    /// Loading happens before the logger exists, so call this after
    /// `logging::init`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    /// Generation settings seeded from the configured defaults.
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig::new(self.default_password_length)
            .exclude_ambiguous(self.default_password_exclude_similar)
    }

    /// The evaluator to use for this process, with any extra deny-list
    /// words merged in.
    pub fn evaluator(&self) -> Result<Evaluator> {
        let deny_list = match &self.deny_list_path {
            Some(path) => DenyList::load(path).map_err(|source| ConfigError::DenyList {
                path: path.clone(),
                source,
            })?,
            None => DenyList::builtin().clone(),
        };

        Ok(Evaluator::new(deny_list))
    }
}
