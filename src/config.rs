//! Application configuration.
//!
//! Read from `~/.railops/config.json` (written with defaults on first
//! launch), then overridden by `RAILOPS_*` environment variables.

use crate::core::constants::DEFAULT_HISTORY_LIMIT;
use crate::core::params::SimulationParameters;
use crate::error::{Error, Result};
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_LOG_FILTER: &str = "railops=info";
pub const DEFAULT_LOG_FILE: &str = "railops.log";
pub const DEFAULT_WEB_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum number of finished runs kept in memory
    pub history_limit: usize,
    /// Parameters the simulation page opens with
    pub default_parameters: SimulationParameters,
    /// tracing filter directive used when `RAILOPS_LOG` is unset
    pub log_level: String,
    /// File name inside ~/.railops/ that receives log output
    pub log_file: String,
    /// Port for `--serve` when none is given on the command line
    pub web_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_parameters: SimulationParameters::default(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            web_port: DEFAULT_WEB_PORT,
        }
    }
}

impl AppConfig {
    /// Loads the config file, creating it with defaults when missing.
    /// A malformed file is reported and replaced by defaults in memory
    /// (the file itself is left alone so it can be fixed by hand).
    pub fn load() -> Self {
        let mut config = match persistence::load_json::<AppConfig>(CONFIG_FILE) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = AppConfig::default();
                if let Err(e) = persistence::save_json(CONFIG_FILE, &config) {
                    warn!(error = %e, "could not write default config");
                }
                config
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config file");
                AppConfig::default()
            }
        };

        if let Err(e) = config.apply_env(|key| std::env::var(key).ok()) {
            warn!(error = %e, "ignoring invalid environment override");
        }
        config.normalized()
    }

    /// Applies `RAILOPS_HISTORY_LIMIT` and `RAILOPS_WEB_PORT` overrides.
    /// `lookup` abstracts the environment for tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("RAILOPS_HISTORY_LIMIT") {
            self.history_limit = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("RAILOPS_HISTORY_LIMIT={raw}")))?;
        }
        if let Some(raw) = lookup("RAILOPS_WEB_PORT") {
            self.web_port = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("RAILOPS_WEB_PORT={raw}")))?;
        }
        Ok(())
    }

    /// Pulls values into usable ranges.
    pub fn normalized(mut self) -> Self {
        self.history_limit = self.history_limit.max(1);
        self.default_parameters = self.default_parameters.clamped();
        if self.log_file.trim().is_empty() {
            self.log_file = DEFAULT_LOG_FILE.to_string();
        }
        self
    }
}
