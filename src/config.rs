use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub planning: PlanningConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Defaults for plan generation when the CLI does not override them.
#[derive(Debug, Deserialize, Clone)]
pub struct PlanningConfig {
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,
    #[serde(default = "default_workouts_per_week")]
    pub workouts_per_week: u32,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            duration_days: default_duration_days(),
            workouts_per_week: default_workouts_per_week(),
        }
    }
}

fn default_duration_days() -> u32 {
    7
}

fn default_workouts_per_week() -> u32 {
    3
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FITTRACK__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:fittrack.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FITTRACK")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the unprefixed variable most deployments already set
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.database.url.is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.planning.duration_days < 1 {
            return Err("Planning duration_days must be at least 1".to_string());
        }
        if self.planning.workouts_per_week < 1 {
            return Err("Planning workouts_per_week must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 5,
            },
            observability: ObservabilityConfig::default(),
            planning: PlanningConfig::default(),
        }
    }

    #[test]
    fn test_validation_passes_for_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = base_config();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_url() {
        let mut config = base_config();
        config.database.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_planning_defaults() {
        let planning = PlanningConfig::default();
        assert_eq!(planning.duration_days, 7);
        assert_eq!(planning.workouts_per_week, 3);
    }
}
