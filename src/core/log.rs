//! Debug log file.
//!
//! The subscriber is installed as the default for the current thread only and
//! removed when [`DiagnosticLog`] is dropped, so its lifetime is exactly the
//! lifetime of the value returned by [`DiagnosticLog::open`].

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log level.
pub const LOG_ENV: &str = "AUTOTIMESHEET_LOG";

pub struct DiagnosticLog {
    path: PathBuf,
    _guard: DefaultGuard,
}

impl DiagnosticLog {
    /// Create (truncate) the log file and start routing `tracing` events to it.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let path = expand_tilde(&cfg.log_file);
        let file = File::create(&path)?;

        let filter = match EnvFilter::try_from_env(LOG_ENV) {
            Ok(f) => f,
            Err(_) => EnvFilter::try_new(&cfg.log_level)
                .map_err(|e| AppError::Config(format!("log_level '{}': {}", cfg.log_level, e)))?,
        };

        let subscriber = tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_env_filter(filter)
            .finish();

        let guard = tracing::subscriber::set_default(subscriber);
        tracing::debug!("Program Start");

        Ok(Self {
            path,
            _guard: guard,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Log the end of the run and detach the subscriber.
    pub fn close(self) {
        tracing::debug!("Program End");
    }
}
