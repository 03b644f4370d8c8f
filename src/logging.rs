//! Tracing setup.
//!
//! Stdout belongs to the TUI, so tracing events go to the file configured
//! via `BOOKMASTER_LOG`, or nowhere when logging is disabled.

use std::fs;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Error, Result};

/// Install the global subscriber writing to the configured log file.
///
/// A no-op when no log file is configured. Safe to call once per process;
/// a second installation attempt is reported as an error.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
    }
    let file = fs::File::create(path).map_err(|e| Error::io(e, path.clone()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bookmaster=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Msg(format!("failed to install tracing subscriber: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn disabled_logging_is_a_noop() {
        let config = Config::default();
        assert!(config.log_file.is_none());
        assert!(init(&config).is_ok());
    }

    #[test]
    fn init_creates_the_log_file_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("bookmaster.log");
        let mut config = Config::default();
        config.log_file = Some(path.clone());

        init(&config).unwrap();
        assert!(path.exists());
    }
}
