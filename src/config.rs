use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Catalog file replacing the built-in dish list
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    #[serde(default = "default_days")]
    pub days: u8,
    #[serde(default = "default_meals_per_day")]
    pub lunches_per_day: usize,
    #[serde(default = "default_meals_per_day")]
    pub dinners_per_day: usize,
    /// Start a new rotation once every dish has been used instead of failing
    #[serde(default)]
    pub allow_repeats: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            lunches_per_day: default_meals_per_day(),
            dinners_per_day: default_meals_per_day(),
            allow_repeats: false,
        }
    }
}

fn default_days() -> u8 {
    7
}

fn default_meals_per_day() -> usize {
    1
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Image manifest replacing the built-in slug-to-URL table
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            concurrency: default_concurrency(),
            retries: default_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_secs: default_timeout_secs(),
            manifest: None,
        }
    }
}

impl AssetsConfig {
    pub fn download_options(&self) -> foodplan_assets::DownloadOptions {
        foodplan_assets::DownloadOptions {
            concurrency: self.concurrency,
            retries: self.retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public/images")
}

fn default_concurrency() -> usize {
    4
}

fn default_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_timeout_secs() -> u64 {
    15
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

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOODPLAN__ASSETS__CONCURRENCY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOODPLAN")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            builder = builder.set_override("observability.log_level", log_level)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=7).contains(&self.plan.days) {
            return Err("Plan days must be between 1 and 7".to_string());
        }
        if self.plan.lunches_per_day == 0 && self.plan.dinners_per_day == 0 {
            return Err("Plan must contain at least one meal per day".to_string());
        }
        if self.assets.concurrency < 1 {
            return Err("Assets concurrency must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_days_out_of_range() {
        for days in [0, 8] {
            let config = Config {
                plan: PlanConfig {
                    days,
                    ..PlanConfig::default()
                },
                ..Config::default()
            };

            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_validation_no_meals() {
        let config = Config {
            plan: PlanConfig {
                lunches_per_day: 0,
                dinners_per_day: 0,
                ..PlanConfig::default()
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_concurrency() {
        let config = Config {
            assets: AssetsConfig {
                concurrency: 0,
                ..AssetsConfig::default()
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_download_options_from_config() {
        let options = AssetsConfig::default().download_options();

        assert_eq!(options.concurrency, 4);
        assert_eq!(options.retries, 2);
        assert_eq!(options.retry_delay, Duration::from_millis(500));
        assert_eq!(options.timeout, Duration::from_secs(15));
    }
}
