//! log4rs initialisation.

use crate::config::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Initialise logging from the configured YAML file.
///
/// Falls back to a stderr console appender at `config.log_level` when the
/// file does not exist. Log output never goes to stdout.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                config.log_config.display()
            )
        })?;
        log::debug!("Logging configured from {}", config.log_config.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    log::debug!(
        "Log config {} not found, logging to stderr",
        config.log_config.display()
    );
    Ok(())
}
