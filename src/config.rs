//! Runtime configuration.
//!
//! Settings come from the environment, optionally seeded from a `.env` file:
//! - `CIDR_LOG_CONFIG` - log4rs YAML file (default `log4rs.yml`)
//! - `CIDR_LOG_LEVEL` - level used when that file is missing (default `info`)
//! - `CIDR_OUTPUT` - `csv` (default) or `json`

use clap::ValueEnum;
use log::LevelFilter;
use std::error::Error;
use std::path::PathBuf;

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How block lists are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub log_level: LevelFilter,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: LevelFilter::Info,
            output: OutputFormat::Csv,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup.
    pub fn from_vars<V>(var: V) -> Result<Config, Box<dyn Error>>
    where
        V: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = var("CIDR_LOG_CONFIG") {
            config.log_config = PathBuf::from(path);
        }
        if let Some(level) = var("CIDR_LOG_LEVEL") {
            config.log_level = level
                .parse()
                .map_err(|_| format!("Invalid CIDR_LOG_LEVEL '{level}'"))?;
        }
        if let Some(output) = var("CIDR_OUTPUT") {
            config.output = OutputFormat::from_str(output.trim(), true)
                .map_err(|e| format!("Invalid CIDR_OUTPUT '{output}': {e}"))?;
        }
        Ok(config)
    }
}
