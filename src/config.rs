//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// File name of the default storage file.
const DATA_FILE: &str = "scores.json";
/// Storage file used when no data directory is known.
const FALLBACK_DATA_FILE: &str = "tui-guess-scores.json";

/// Crates whose log records are let through at the configured level.
const LOG_MODULES: [&str; 5] = [
    "tui_guess",
    "tui_guess_core",
    "tui_guess_input",
    "tui_guess_store",
    "tui_guess_term",
];

/// Binary configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub log_level: LevelFilter,
    /// Fixed seed for secrets and confetti; random when unset.
    pub seed: Option<u32>,
    pub confetti_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            log_level: LevelFilter::Off,
            seed: None,
            confetti_enabled: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `GUESS_DATA_PATH`: storage file
    /// - `GUESS_LOG`: log level (`off`, `error`, ... `trace`)
    /// - `GUESS_SEED`: fixed seed
    /// - `GUESS_CONFETTI_DISABLED`: `1` or `true` turns the celebration off
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let data_path = var("GUESS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);

        let log_level = var("GUESS_LOG")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Off);

        let seed = var("GUESS_SEED").and_then(|s| s.parse().ok());

        let confetti_enabled = !var("GUESS_CONFETTI_DISABLED")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            data_path,
            log_level,
            seed,
            confetti_enabled,
        }
    }

    /// Seed to use for this run.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// `<data_local_dir>/tui-guess/scores.json`, or a file in the working directory.
pub fn default_data_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("tui-guess").join(DATA_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_FILE))
}

/// Install the logger; records go to stderr.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    LOG_MODULES
        .iter()
        .fold(SimpleLogger::new().with_level(LevelFilter::Off), |logger, module| {
            logger.with_module_level(module, level)
        })
        .init()
        .context("installing logger")
}
