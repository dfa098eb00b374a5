//! Configuration loading.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! is a valid configuration. Environment variables override the file:
//!
//! | Variable | Field |
//! |---|---|
//! | `PIZZA_DASHBOARD_CONFIG` | path of a YAML file to start from |
//! | `PIZZA_FORECAST_URL` | `forecast_url` |
//! | `PIZZA_FORECAST_DATE` | `forecast_date` (`YYYY-MM-DD`) |
//! | `PIZZA_STORE_BUFFER` | `store_buffer` |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "PIZZA_DASHBOARD_CONFIG";
pub const FORECAST_URL_VAR: &str = "PIZZA_FORECAST_URL";
pub const FORECAST_DATE_VAR: &str = "PIZZA_FORECAST_DATE";
pub const STORE_BUFFER_VAR: &str = "PIZZA_STORE_BUFFER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value {value:?} for {var}")]
    Env { var: &'static str, value: String },

    #[error("Invalid config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the forecast service
    pub forecast_url: String,

    /// Date sent with the forecast request
    pub forecast_date: NaiveDate,

    /// Request channel capacity of the order store
    pub store_buffer: usize,

    /// Start with the four sample orders
    pub seed_orders: bool,

    /// How many generated order numbers to try before giving up
    pub order_number_attempts: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            forecast_url: "http://127.0.0.1:8000".to_string(),
            forecast_date: NaiveDate::from_ymd_opt(2025, 3, 27).unwrap_or(NaiveDate::MIN),
            store_buffer: 32,
            seed_orders: true,
            order_number_attempts: 8,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the system cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer == 0 {
            return Err(ConfigError::Invalid {
                field: "store_buffer",
                reason: "must be greater than zero",
            });
        }
        if self.order_number_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "order_number_attempts",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        if let Some(url) = lookup(FORECAST_URL_VAR) {
            config.forecast_url = url;
        }
        if let Some(value) = lookup(FORECAST_DATE_VAR) {
            config.forecast_date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                ConfigError::Env {
                    var: FORECAST_DATE_VAR,
                    value: value.clone(),
                }
            })?;
        }
        if let Some(value) = lookup(STORE_BUFFER_VAR) {
            config.store_buffer = value.parse().map_err(|_| ConfigError::Env {
                var: STORE_BUFFER_VAR,
                value: value.clone(),
            })?;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DashboardConfig::from_yaml_str(
            "forecast_url: http://forecast.internal:9000\nseed_orders: false\n",
        )
        .unwrap();

        assert_eq!(config.forecast_url, "http://forecast.internal:9000");
        assert!(!config.seed_orders);
        assert_eq!(config.store_buffer, 32);
        assert_eq!(config.forecast_date.to_string(), "2025-03-27");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            DashboardConfig::from_yaml_str("").unwrap(),
            DashboardConfig::default()
        );
    }

    #[test]
    fn test_bad_yaml_is_reported() {
        let result = DashboardConfig::from_yaml_str("store_buffer: lots");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_env_overrides() {
        let config = DashboardConfig::from_lookup(env(&[
            (FORECAST_URL_VAR, "http://localhost:1234"),
            (FORECAST_DATE_VAR, "2025-04-01"),
            (STORE_BUFFER_VAR, "4"),
        ]))
        .unwrap();

        assert_eq!(config.forecast_url, "http://localhost:1234");
        assert_eq!(config.forecast_date.to_string(), "2025-04-01");
        assert_eq!(config.store_buffer, 4);
    }

    #[test]
    fn test_yaml_rejects_zero_store_buffer() {
        let result = DashboardConfig::from_yaml_str("store_buffer: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "store_buffer",
                ..
            })
        ));
    }

    #[test]
    fn test_yaml_rejects_zero_number_attempts() {
        let result = DashboardConfig::from_yaml_str("order_number_attempts: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "order_number_attempts",
                ..
            })
        ));
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let result = DashboardConfig::from_lookup(env(&[(STORE_BUFFER_VAR, "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "store_buffer",
                ..
            })
        ));

        let result = DashboardConfig::from_lookup(env(&[(STORE_BUFFER_VAR, "many")]));
        assert!(matches!(
            result,
            Err(ConfigError::Env { var: STORE_BUFFER_VAR, .. })
        ));

        let result = DashboardConfig::from_lookup(env(&[(FORECAST_DATE_VAR, "tomorrow")]));
        assert!(matches!(result, Err(ConfigError::Env { .. })));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result =
            DashboardConfig::from_lookup(env(&[(CONFIG_PATH_VAR, "/nonexistent/pizza.yaml")]));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
