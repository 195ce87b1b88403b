use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use workout_core::{DEFAULT_PAGE_LENGTH, PAGE_LENGTHS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Directory holding the workout data and log file.
    /// Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Entries per page when the list opens (5, 10 or 20).
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Log filter used when RUST_LOG is unset, e.g. "debug" or "workout_core=trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_LENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl WorkoutConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("workout-tui")
            .join("config.toml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Cannot determine data directory")?
                .join("workout-tui")),
        }
    }

    /// Configured page size, or the default when it is not one the list offers.
    pub fn page_length(&self) -> usize {
        if PAGE_LENGTHS.contains(&self.page_size) {
            self.page_size
        } else {
            DEFAULT_PAGE_LENGTH
        }
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(WorkoutConfig::parse("").unwrap(), WorkoutConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let cfg = WorkoutConfig::parse(
            r#"
            data_dir = "/tmp/workouts"
            page_size = 20
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/workouts")));
        assert_eq!(cfg.data_dir().unwrap(), PathBuf::from("/tmp/workouts"));
        assert_eq!(cfg.page_length(), 20);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn unsupported_page_size_falls_back() {
        let cfg = WorkoutConfig::parse("page_size = 7").unwrap();
        assert_eq!(cfg.page_length(), 5);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&WorkoutConfig::default()).unwrap();
        assert_eq!(WorkoutConfig::parse(&raw).unwrap(), WorkoutConfig::default());
    }
}
