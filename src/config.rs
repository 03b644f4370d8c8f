//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Display locale tag for dates ("ru" or "en")
    pub locale: String,
    /// Currency symbol used for prices
    pub currency: String,
    /// Account holder shown in the sidebar footer
    pub profile_name: String,
    /// Account holder's role line
    pub profile_role: String,
    /// Log file path, if logging is enabled
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// The chrono locale used to render weekday and month names.
    #[must_use]
    pub fn chrono_locale(&self) -> chrono::Locale {
        match self.locale.as_str() {
            "en" => chrono::Locale::en_US,
            _ => chrono::Locale::ru_RU,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            locale: "ru".to_string(),
            currency: "₽".to_string(),
            profile_name: "Елена Смирнова".to_string(),
            profile_role: "Мастер маникюра".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(locale) = env::var("BOOKMASTER_LOCALE") {
            match locale.as_str() {
                "ru" | "en" => config.locale = locale,
                other => {
                    return Err(Error::config(
                        format!("unknown locale '{other}'"),
                        "Set BOOKMASTER_LOCALE to 'ru' or 'en'",
                    ));
                }
            }
        }

        if let Ok(currency) = env::var("BOOKMASTER_CURRENCY") {
            config.currency = currency;
        }

        if let Ok(name) = env::var("BOOKMASTER_PROFILE_NAME") {
            config.profile_name = name;
        }

        if let Ok(role) = env::var("BOOKMASTER_PROFILE_ROLE") {
            config.profile_role = role;
        }

        // BOOKMASTER_LOG: a path enables logging there; "1"/"true" picks a
        // default location under the local data directory.
        if let Ok(log) = env::var("BOOKMASTER_LOG") {
            config.log_file = match log.as_str() {
                "" | "0" | "false" => None,
                "1" | "true" => default_log_path(),
                path => Some(PathBuf::from(path)),
            };
        }

        Ok(config)
    }
}

/// Default log location: `<local data dir>/bookmaster/bookmaster.log`.
fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("bookmaster").join("bookmaster.log"))
}
