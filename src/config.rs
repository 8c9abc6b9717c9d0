//! Logging set-up for the binary.
//!
//! Reads a log4rs YAML file, `log4rs.yml` by default or the path in
//! `CIDR_RANGE_LOG_CONFIG`. Without the file, warnings go to stderr.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "CIDR_RANGE_LOG_CONFIG";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Path of the log4rs config file to use.
pub fn log_config_path() -> String {
    std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string())
}

/// Stderr-only config used when no YAML file is present.
pub fn fallback_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialize the global logger.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = log_config_path();
    if Path::new(&path).exists() {
        log4rs::init_file(&path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
        log::debug!("Logging configured from {path}");
    } else {
        log4rs::init_config(fallback_config(LevelFilter::Warn)?)?;
        log::debug!("No {path}, logging warnings to stderr");
    }
    Ok(())
}
