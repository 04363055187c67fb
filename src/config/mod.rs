use crate::core::days::{DEFAULT_DAYS, MAX_DAYS, MIN_DAYS};
use crate::core::registry::find_line;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::resolve_in_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_days")]
    pub default_days: usize,
    #[serde(default = "default_line")]
    pub default_line: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_days() -> usize {
    DEFAULT_DAYS
}
fn default_line() -> String {
    "Line 1".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_days: default_days(),
            default_line: default_line(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.dtlogger`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dtlogger")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dtlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dtlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file {}: {e}; using defaults.",
                    path.display()
                ));
                Config::default()
            }
        }
    }

    /// Out-of-range values fall back to their defaults.
    fn sanitized(mut self) -> Self {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.default_days) {
            warning(format!(
                "default_days = {} is out of range ({MIN_DAYS}..={MAX_DAYS}); using {DEFAULT_DAYS}.",
                self.default_days
            ));
            self.default_days = DEFAULT_DAYS;
        }
        if find_line(&self.default_line).is_err() {
            warning(format!(
                "default_line '{}' is not a known line; using Line 1.",
                self.default_line
            ));
            self.default_line = default_line();
        }
        self
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, the config file and an empty DB file.
    /// Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => resolve_in_dir(&dir, name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
