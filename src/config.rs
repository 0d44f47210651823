//! User configuration
//!
//! Read from `<config home>/config.toml`, where the config home is
//! `$AGENTDECK_HOME` or `$HOME/.config/agentdeck`. Every key is optional.
//! `AGENTDECK_AUTHOR` and `AGENTDECK_REDUCED_MOTION` override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::engine::{DebounceSettings, PlaybackSettings};

/// File name looked up inside the config home
pub const CONFIG_FILE: &str = "config.toml";

/// Author used when nothing is configured
pub const DEFAULT_AUTHOR: &str = "dylan@example.com";

/// Errors from loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timing: {0}")]
    InvalidTiming(String),
}

/// Debounce and playback durations, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub save_settle_ms: u64,
    pub history_flush_ms: u64,
    pub reveal_min_ms: u64,
    pub reveal_max_ms: u64,
    pub deploy_duration_ms: u64,
    pub emphasis_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            save_settle_ms: 1500,
            history_flush_ms: 3000,
            reveal_min_ms: 150,
            reveal_max_ms: 300,
            deploy_duration_ms: 10_000,
            emphasis_delay_ms: 200,
        }
    }
}

impl TimingConfig {
    /// Check the relationships the state machines rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("save_settle_ms", self.save_settle_ms),
            ("history_flush_ms", self.history_flush_ms),
            ("reveal_min_ms", self.reveal_min_ms),
            ("reveal_max_ms", self.reveal_max_ms),
            ("deploy_duration_ms", self.deploy_duration_ms),
            ("emphasis_delay_ms", self.emphasis_delay_ms),
        ];
        if let Some((name, _)) = named.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::InvalidTiming(format!("{name} must be greater than 0")));
        }
        if self.history_flush_ms <= self.save_settle_ms {
            return Err(ConfigError::InvalidTiming(format!(
                "history_flush_ms ({}) must be greater than save_settle_ms ({})",
                self.history_flush_ms, self.save_settle_ms
            )));
        }
        if self.reveal_min_ms > self.reveal_max_ms {
            return Err(ConfigError::InvalidTiming(format!(
                "reveal_min_ms ({}) must not exceed reveal_max_ms ({})",
                self.reveal_min_ms, self.reveal_max_ms
            )));
        }
        Ok(())
    }
}

/// Log file settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset ("info", "agentdeck=debug")
    pub level: Option<String>,
    /// Log directory; defaults to `<config home>/logs`
    pub dir: Option<String>,
}

/// Complete user configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Identity recorded on history entries
    pub author: String,
    /// Skip reveal animations
    pub reduced_motion: bool,
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            reduced_motion: false,
            timing: TimingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Parse and validate a TOML document
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.timing.validate()?;
        Ok(settings)
    }

    /// Load `path`, returning defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(author) = lookup("AGENTDECK_AUTHOR").filter(|a| !a.trim().is_empty()) {
            self.author = author.trim().to_string();
        }
        if let Some(flag) = lookup("AGENTDECK_REDUCED_MOTION") {
            self.reduced_motion = parse_flag(&flag);
        }
    }

    pub fn debounce(&self) -> DebounceSettings {
        DebounceSettings {
            settle: Duration::from_millis(self.timing.save_settle_ms),
            flush: Duration::from_millis(self.timing.history_flush_ms),
        }
    }

    pub fn playback(&self) -> PlaybackSettings {
        PlaybackSettings {
            reveal_min: Duration::from_millis(self.timing.reveal_min_ms),
            reveal_max: Duration::from_millis(self.timing.reveal_max_ms),
            duration: Duration::from_millis(self.timing.deploy_duration_ms),
            emphasis_delay: Duration::from_millis(self.timing.emphasis_delay_ms),
            reduced_motion: self.reduced_motion,
        }
    }

    /// Directory for log files
    pub fn log_dir(&self, home: &Path) -> PathBuf {
        match self.logging.dir.as_deref() {
            Some(dir) => expand_home(dir),
            None => home.join("logs"),
        }
    }
}

/// Resolve the config home directory
pub fn config_home() -> PathBuf {
    if let Some(home) = std::env::var_os("AGENTDECK_HOME").filter(|h| !h.is_empty()) {
        return PathBuf::from(home);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".config").join("agentdeck");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".agentdeck")
}

/// Load settings from the config home and the process environment
pub fn load(home: &Path) -> Result<Settings, ConfigError> {
    let mut settings = Settings::load(&home.join(CONFIG_FILE))?;
    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

/// Expand a leading `~/` to `$HOME`
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
