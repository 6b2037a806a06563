//! Tracing initialization.
//!
//! The terminal belongs to the dashboard, so log output goes to a file in
//! ~/.railops/ instead of stderr.

use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::persistence;
use std::fs::OpenOptions;
use std::sync::{Mutex, Once};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-module log directives,
/// e.g. `RAILOPS_LOG=railops::core=debug,railops::web=info`.
pub const LOG_ENV: &str = "RAILOPS_LOG";

/// Initialize tracing for the interactive dashboard.
///
/// Falls back to the config's `log_level` when `RAILOPS_LOG` is unset or
/// invalid. Calling this more than once is harmless.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let path = persistence::data_path(&config.log_file)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
    Ok(())
}

/// Initialize tracing to stderr for headless tools.
pub fn init_stderr_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
